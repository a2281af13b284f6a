#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use egui::{pos2, vec2, Color32};
use textify::error::RequestError;
use textify::{ApiRequest, AppContext, Config, Document, JsonStore, Reply, Stroke, TextifyApi};

/// Plays back queued replies and records every request it receives
#[derive(Default)]
pub struct ScriptedApi {
    replies: RefCell<VecDeque<Result<Reply, RequestError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(Reply::new(status, body)));
    }

    pub fn fail_transport(&self) {
        self.replies
            .borrow_mut()
            .push_back(Err(RequestError::Transport("connection refused".into())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl TextifyApi for ScriptedApi {
    fn post(&self, request: ApiRequest) -> Result<Reply, RequestError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected request: no scripted reply left")
    }
}

pub fn test_config(dir: &Path) -> Config {
    Config::new("http://textify.test", dir)
}

pub fn context_in(dir: &Path, api: &Rc<ScriptedApi>) -> AppContext {
    let config = test_config(dir);
    let store = JsonStore::open(config.store_path()).expect("store");
    AppContext::new(config, Box::new(Rc::clone(api)), store)
}

/// Log the context in without going through the server
pub fn logged_in(dir: &Path, api: &Rc<ScriptedApi>, id: &str) -> AppContext {
    let mut ctx = context_in(dir, api);
    ctx.login(textify::Token::User(id.to_owned())).expect("persist token");
    ctx
}

/// A small canvas with a diagonal stroke on it
pub fn sketch() -> Document {
    let mut doc = Document::new();
    doc.set_canvas_size(vec2(64.0, 64.0));
    doc.add_stroke(Stroke::new_ref(
        Color32::BLACK,
        5.0,
        vec![pos2(8.0, 8.0), pos2(56.0, 56.0)],
    ));
    doc
}
