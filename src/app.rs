use crate::file_handler::FileHandler;
use crate::flows::{details, RecognitionMode};
use crate::navigator::{Navigator, ScreenId, SlideDirection};
use crate::panels::{self, LoginForm, PaintScreen, RecognitionScreen, RegisterForm};
use crate::renderer::Renderer;
use crate::request::Notice;
use crate::state::AppContext;
use crate::symbols::SymbolCursor;
use crate::texture_manager::TextureManager;

const SYMBOL_KEY: &str = "textify_symbol";

/// The Textify window: one screen at a time plus an optional modal notice.
pub struct TextifyApp {
    pub(crate) context: AppContext,
    pub(crate) navigator: Navigator,
    pub(crate) login: LoginForm,
    pub(crate) register: RegisterForm,
    pub(crate) paint: PaintScreen,
    pub(crate) printed: RecognitionScreen,
    pub(crate) handwritten: RecognitionScreen,
    pub(crate) textures: TextureManager,
    pub(crate) renderer: Renderer,
    file_handler: FileHandler,
    notice: Option<Notice>,
}

impl TextifyApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, context: AppContext) -> Self {
        let mut app = Self::with_context(context);
        if let Some(storage) = cc.storage {
            if let Some(cursor) = eframe::get_value::<SymbolCursor>(storage, SYMBOL_KEY) {
                app.context.symbol = SymbolCursor::new(cursor.index());
            }
        }
        app
    }

    /// App without a window, starting on the menu
    pub fn with_context(context: AppContext) -> Self {
        Self {
            context,
            navigator: Navigator::default(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            paint: PaintScreen::default(),
            printed: RecognitionScreen::new(RecognitionMode::Printed),
            handwritten: RecognitionScreen::new(RecognitionMode::Handwritten),
            textures: TextureManager::new(),
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            notice: None,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn slide_to(&mut self, screen: ScreenId, direction: SlideDirection, now: f64) {
        self.navigator.slide_to(screen, direction, now);
    }

    pub(crate) fn jump_to(&mut self, screen: ScreenId) {
        self.navigator.jump_to(screen);
    }

    pub(crate) fn show_notice(&mut self, notice: Notice) {
        log::info!("{} {}", notice.title, notice.message);
        self.notice = Some(notice);
    }

    /// Show the notice of a failed action, if any
    pub(crate) fn report<T>(&mut self, result: Result<T, Notice>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(notice) => {
                self.show_notice(notice);
                None
            }
        }
    }

    /// Hooks that run when a screen becomes active
    pub(crate) fn on_enter(&mut self, screen: ScreenId) {
        match screen {
            ScreenId::SymbolDetails => {
                let fetched = details::fetch_examples(&self.context);
                if self.report(fetched).is_some() {
                    self.textures.reload();
                }
            }
            ScreenId::Paint => self.paint.tool.cancel(),
            _ => {}
        }
    }

    fn route_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        let Some(path) = self.file_handler.take_dropped_image() else {
            return;
        };
        let result = match self.navigator.current() {
            ScreenId::TextRecognition => self.printed.recognize_path(&self.context, path),
            ScreenId::HandwritingRecognition => {
                self.handwritten.recognize_path(&self.context, path)
            }
            other => {
                log::debug!("Ignoring dropped file on {}", other.name());
                Ok(())
            }
        };
        self.report(result);
    }

    fn show_notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut close = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice_modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close {
            self.notice = None;
        }
    }
}

impl eframe::App for TextifyApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SYMBOL_KEY, &self.context.symbol);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.navigator.finish_if_done(now);

        if self.navigator.take_entered() {
            let screen = self.navigator.current();
            self.on_enter(screen);
        }

        self.route_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let offset = self.navigator.offset(now, rect.width());
            let screen_rect = rect.translate(egui::vec2(offset, 0.0));

            ui.allocate_new_ui(egui::UiBuilder::new().max_rect(screen_rect), |ui| {
                ui.set_clip_rect(rect);
                // Screens are inert while a modal is open
                if self.notice.is_some() {
                    ui.disable();
                }
                panels::show_screen(self, ui, now);
            });
        });

        self.show_notice_window(ctx);

        if matches!(
            self.navigator.current(),
            ScreenId::TextRecognition | ScreenId::HandwritingRecognition
        ) {
            self.file_handler.preview_files_being_dropped(ctx);
        }

        if self.navigator.is_animating() {
            ctx.request_repaint();
        }
    }
}
