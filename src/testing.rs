//! In-memory host for unit tests
//!
//! `FakePage` lays text out at a fixed line height so `scrollHeight` behaves
//! like a textarea: content height, never less than the rendered box.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::{Rc, Weak};

use crate::behaviors::Ui;
use crate::config::UiConfig;
use crate::error::UiError;
use crate::page::Page;
use crate::utils::{Clipboard, NoticeKind, Notifier, TaskHandle, Timer};

pub const LINE_HEIGHT: i32 = 20;
pub const VERTICAL_PADDING: i32 = 8;
/// Rows a textarea shows with `height: auto`
pub const DEFAULT_ROWS: i32 = 2;

/// Height of `lines` lines of text including padding
pub fn content_height(lines: i32) -> i32 {
    lines * LINE_HEIGHT + VERTICAL_PADDING
}

#[derive(Default)]
struct FakeElement {
    text: String,
    styles: HashMap<String, String>,
    classes: BTreeSet<String>,
}

#[derive(Default)]
struct FakeDom {
    elements: HashMap<String, FakeElement>,
    selectors: HashMap<String, String>,
    style_writes: Vec<(String, String, String)>,
    load_handlers: Vec<Box<dyn FnOnce()>>,
    ready_handlers: Vec<Box<dyn FnOnce()>>,
    input_handlers: HashMap<String, Vec<Box<dyn FnMut()>>>,
}

/// Elements are addressed by id; the handle is the id itself
#[derive(Clone, Default)]
pub struct FakePage {
    dom: Rc<RefCell<FakeDom>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str, text: &str) -> Self {
        self.insert(id, text);
        self
    }

    /// Make `selector` resolve to the element `id`
    pub fn with_selector(self, selector: &str, id: &str) -> Self {
        self.dom
            .borrow_mut()
            .selectors
            .insert(selector.to_string(), id.to_string());
        self
    }

    pub fn insert(&self, id: &str, text: &str) {
        self.dom.borrow_mut().elements.insert(
            id.to_string(),
            FakeElement {
                text: text.to_string(),
                ..Default::default()
            },
        );
    }

    pub fn remove(&self, id: &str) {
        self.dom.borrow_mut().elements.remove(id);
    }

    pub fn style(&self, id: &str, property: &str) -> Option<String> {
        self.dom
            .borrow()
            .elements
            .get(id)
            .and_then(|e| e.styles.get(property).cloned())
    }

    pub fn height_px(&self, id: &str) -> Option<i32> {
        self.style(id, "height").and_then(|h| parse_px(&h))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.dom
            .borrow()
            .elements
            .get(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    /// Every `(id, property, value)` written so far, in order
    pub fn style_writes(&self) -> Vec<(String, String, String)> {
        self.dom.borrow().style_writes.clone()
    }

    pub fn input_listener_count(&self, id: &str) -> usize {
        self.dom
            .borrow()
            .input_handlers
            .get(id)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Dispatch `load`; like the browser, each handler sees it once
    pub fn fire_load(&self) {
        let handlers = std::mem::take(&mut self.dom.borrow_mut().load_handlers);
        for handler in handlers {
            handler();
        }
    }

    pub fn fire_dom_ready(&self) {
        let handlers = std::mem::take(&mut self.dom.borrow_mut().ready_handlers);
        for handler in handlers {
            handler();
        }
    }

    /// Append `text` as if typed, then dispatch `input`
    pub fn type_text(&self, id: &str, text: &str) {
        if let Some(element) = self.dom.borrow_mut().elements.get_mut(id) {
            element.text.push_str(text);
        }
        self.fire_input(id);
    }

    /// Replace the content, then dispatch `input`
    pub fn replace_text(&self, id: &str, text: &str) {
        if let Some(element) = self.dom.borrow_mut().elements.get_mut(id) {
            element.text = text.to_string();
        }
        self.fire_input(id);
    }

    fn fire_input(&self, id: &str) {
        let mut handlers = self
            .dom
            .borrow_mut()
            .input_handlers
            .remove(id)
            .unwrap_or_default();
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut dom = self.dom.borrow_mut();
        let slot = dom.input_handlers.entry(id.to_string()).or_default();
        handlers.append(slot);
        *slot = handlers;
    }
}

fn parse_px(value: &str) -> Option<i32> {
    value.strip_suffix("px").and_then(|n| n.trim().parse().ok())
}

impl Page for FakePage {
    type Element = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.dom
            .borrow()
            .elements
            .contains_key(id)
            .then(|| id.to_string())
    }

    fn query_selector(&self, selector: &str) -> Option<String> {
        let mapped = self.dom.borrow().selectors.get(selector).cloned();
        match mapped {
            Some(id) => self.element_by_id(&id),
            None => selector
                .strip_prefix('#')
                .filter(|id| !id.contains(' '))
                .and_then(|id| self.element_by_id(id)),
        }
    }

    fn set_style(&self, element: &String, property: &str, value: &str) -> Result<(), UiError> {
        let mut dom = self.dom.borrow_mut();
        let target = dom
            .elements
            .get_mut(element)
            .ok_or_else(|| UiError::Style(format!("{} is detached", element)))?;
        target.styles.insert(property.to_string(), value.to_string());
        dom.style_writes
            .push((element.clone(), property.to_string(), value.to_string()));
        Ok(())
    }

    fn rendered_text(&self, element: &String) -> String {
        self.dom
            .borrow()
            .elements
            .get(element)
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    fn scroll_height(&self, element: &String) -> i32 {
        let dom = self.dom.borrow();
        let Some(target) = dom.elements.get(element) else {
            return 0;
        };
        let lines = target.text.split('\n').count() as i32;
        let rendered = target
            .styles
            .get("height")
            .and_then(|h| parse_px(h))
            .unwrap_or_else(|| content_height(DEFAULT_ROWS));
        content_height(lines).max(rendered)
    }

    fn add_class(&self, element: &String, class: &str) -> Result<(), UiError> {
        let mut dom = self.dom.borrow_mut();
        let target = dom
            .elements
            .get_mut(element)
            .ok_or_else(|| UiError::Style(format!("{} is detached", element)))?;
        target.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, element: &String, class: &str) -> Result<(), UiError> {
        let mut dom = self.dom.borrow_mut();
        let target = dom
            .elements
            .get_mut(element)
            .ok_or_else(|| UiError::Style(format!("{} is detached", element)))?;
        target.classes.remove(class);
        Ok(())
    }

    fn on_load(&self, handler: Box<dyn FnOnce()>) {
        self.dom.borrow_mut().load_handlers.push(handler);
    }

    fn on_dom_ready(&self, handler: Box<dyn FnOnce()>) {
        self.dom.borrow_mut().ready_handlers.push(handler);
    }

    fn on_input(&self, element: &String, handler: Box<dyn FnMut()>) {
        self.dom
            .borrow_mut()
            .input_handlers
            .entry(element.clone())
            .or_default()
            .push(handler);
    }
}

/// Clipboard that resolves immediately with a fixed result
pub struct FakeClipboard {
    failure: Option<String>,
    written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            written: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            written: RefCell::new(Vec::new()),
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        match &self.failure {
            Some(reason) => Err(UiError::Clipboard(reason.clone())),
            None => {
                self.written.borrow_mut().push(text.to_string());
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

struct PendingTask {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimerState {
    now: u64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Timer driven by [`ManualTimer::advance`]
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Rc<RefCell<TimerState>>,
}

impl ManualTimer {
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward, running every task that falls due in order
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let earliest = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let pending = state.pending.remove(i);
                    state.now = pending.due;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + u64::from(delay_ms);
            state.pending.push(PendingTask { id, due, task });
            id
        };

        let state: Weak<RefCell<TimerState>> = Rc::downgrade(&self.state);
        TaskHandle::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().pending.retain(|p| p.id != id);
            }
        })
    }
}

/// A `Ui` wired to fakes, with handles kept for assertions
pub struct Harness {
    pub ui: Rc<Ui<FakePage>>,
    pub page: FakePage,
    pub clipboard: Rc<FakeClipboard>,
    pub notifier: Rc<RecordingNotifier>,
    pub timer: ManualTimer,
}

impl Harness {
    pub fn new(page: FakePage) -> Self {
        Self::with_clipboard(page, FakeClipboard::succeeding())
    }

    pub fn with_clipboard(page: FakePage, clipboard: FakeClipboard) -> Self {
        let clipboard = Rc::new(clipboard);
        let notifier = Rc::new(RecordingNotifier::default());
        let timer = ManualTimer::default();
        let ui = Rc::new(Ui::new(
            page.clone(),
            clipboard.clone(),
            notifier.clone(),
            Rc::new(timer.clone()),
            UiConfig::default(),
        ));
        Self {
            ui,
            page,
            clipboard,
            notifier,
            timer,
        }
    }

    /// Subscribe the lifecycle handlers, as the wasm entry point does
    pub fn installed(self) -> Self {
        Ui::install(&self.ui);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_manual_timer_runs_due_tasks_only() {
        let timer = ManualTimer::default();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let _handle = timer.schedule(300, Box::new(move || flag.set(true)));

        timer.advance(299);
        assert!(!ran.get());
        timer.advance(1);
        assert!(ran.get());
        assert_eq!(timer.pending_count(), 0);
    }

    #[test]
    fn test_manual_timer_cancel() {
        let timer = ManualTimer::default();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let handle = timer.schedule(100, Box::new(move || flag.set(true)));
        handle.cancel();

        timer.advance(1000);
        assert!(!ran.get());
    }

    #[test]
    fn test_scroll_height_never_below_rendered_box() {
        let page = FakePage::new().with_element("code", "one");
        let id = "code".to_string();
        assert_eq!(page.scroll_height(&id), content_height(DEFAULT_ROWS));

        page.set_style(&id, "height", "300px").unwrap();
        assert_eq!(page.scroll_height(&id), 300);
    }
}
