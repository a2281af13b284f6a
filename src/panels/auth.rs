use super::back_button;
use crate::flows::auth;
use crate::navigator::{ScreenId, SlideDirection};
use crate::TextifyApp;

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

pub fn login_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    back_button(app, ui, now, ScreenId::Menu);
    ui.heading("Login");
    ui.add_space(12.0);

    let form = &mut app.login;
    let mut submit = false;
    egui::Grid::new("login_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Email");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password");
        let response = ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        submit |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.end_row();
    });

    ui.add_space(12.0);
    submit |= ui.button("Login").clicked();

    if submit {
        let (email, password) = (app.login.email.clone(), app.login.password.clone());
        let result = auth::login(&mut app.context, &email, &password);
        if app.report(result).is_some() {
            app.login.password.clear();
            app.slide_to(ScreenId::Menu, SlideDirection::Right, now);
        }
    }
}

pub fn register_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    back_button(app, ui, now, ScreenId::Menu);
    ui.heading("Register");
    ui.add_space(12.0);

    let form = &mut app.register;
    egui::Grid::new("register_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Email");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password");
        ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        ui.end_row();

        ui.label("Confirm password");
        ui.add(egui::TextEdit::singleline(&mut form.confirmation).password(true));
        ui.end_row();
    });

    ui.add_space(12.0);
    if ui.button("Register").clicked() {
        let form = app.register.clone();
        let result = auth::register(
            &mut app.context,
            &form.email,
            &form.password,
            &form.confirmation,
        );
        if app.report(result).is_some() {
            app.register = RegisterForm::default();
            app.slide_to(ScreenId::Menu, SlideDirection::Right, now);
        }
    }
}
