//! Browser bindings
//!
//! A thin `#[wasm_bindgen]` wrapper over [`DesktopEngine`]. The clock is
//! `Date.now()`; the page renders from the JSON returned by
//! [`FolioDesktop::view_json`].

use folio_content::PanelKind;
use wasm_bindgen::prelude::*;

use crate::engine::DesktopEngine;
use crate::error::DesktopError;
use crate::input::InputResult;
use crate::math::Vec2;
use crate::trash::TrashTrigger;
use crate::window::TitleBarButton;
use crate::DesktopConfig;

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

fn now() -> f64 {
    js_sys::Date::now()
}

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Desktop controller exported to JavaScript
#[wasm_bindgen]
pub struct FolioDesktop {
    engine: DesktopEngine,
}

impl Default for FolioDesktop {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FolioDesktop {
    /// Create a controller with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: DesktopEngine::new(),
        }
    }

    /// Create a controller from a JSON configuration
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<FolioDesktop, JsValue> {
        console_error_panic_hook::set_once();
        let config = DesktopConfig::from_json(json).map_err(to_js)?;
        let engine = DesktopEngine::with_config(config).map_err(to_js)?;
        Ok(Self { engine })
    }

    /// Viewport size changed
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Whether the page should mount the desktop rather than the carousel
    #[wasm_bindgen]
    pub fn is_desktop_presentation(&self) -> bool {
        self.engine.presentation().is_desktop()
    }

    #[wasm_bindgen]
    pub fn icon_pointer_down(&mut self, id: &str, x: f32, y: f32) -> bool {
        let t = now();
        self.engine.handle_icon_pointer_down(id, x, y, t) == InputResult::Handled
    }

    #[wasm_bindgen]
    pub fn window_pointer_down(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.engine.handle_window_pointer_down(id, x, y) == InputResult::Handled
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(x, y) == InputResult::Handled
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        let t = now();
        self.engine.handle_pointer_up(x, y, t) == InputResult::Handled
    }

    /// Open an icon's window as if it was clicked at (x, y)
    #[wasm_bindgen]
    pub fn open_icon(&mut self, id: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.engine
            .open_icon(id, Vec2::new(x, y))
            .map(|_| ())
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.focus_window(id).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.close_window(id).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.engine.move_window(id, x, y).map_err(to_js)
    }

    /// Press "close", "minimize" or "maximize". Returns true if the window
    /// closed.
    #[wasm_bindgen]
    pub fn press_title_button(&mut self, id: &str, button: &str) -> Result<bool, JsValue> {
        let button = TitleBarButton::from_id(button)
            .ok_or_else(|| JsValue::from_str(&format!("unknown title bar button: {}", button)))?;
        self.engine.press_title_button(id, button).map_err(to_js)
    }

    /// Open the "notes" or "photos" panel. Returns false while the desktop
    /// is hidden.
    #[wasm_bindgen]
    pub fn open_panel(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind = PanelKind::from_id(kind)
            .ok_or_else(|| JsValue::from_str(&format!("unknown panel: {}", kind)))?;
        Ok(self.engine.open_panel(kind).is_some())
    }

    /// Click a dock item. Returns the outcome as JSON so the page can
    /// follow links.
    #[wasm_bindgen]
    pub fn dock_click(&mut self, id: &str) -> Result<String, JsValue> {
        let outcome = self.engine.dock_click(id, now()).map_err(to_js)?;
        serde_json::to_string(&outcome).map_err(|e| to_js(e.into()))
    }

    #[wasm_bindgen]
    pub fn dock_hover(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.dock_hover(id).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn dock_unhover(&mut self) {
        self.engine.dock_unhover();
    }

    /// Trash dialog button: "cancel", "confirm", "restore", "confirmDelete"
    #[wasm_bindgen]
    pub fn trash_trigger(&mut self, trigger: &str) -> Result<bool, JsValue> {
        let trigger: TrashTrigger =
            serde_json::from_value(serde_json::Value::String(trigger.to_string()))
                .map_err(|e| to_js(e.into()))?;
        Ok(self.engine.trash_trigger(trigger, now()))
    }

    #[wasm_bindgen]
    pub fn escape(&mut self) -> bool {
        self.engine.handle_escape(now())
    }

    #[wasm_bindgen]
    pub fn backdrop_click(&mut self) -> bool {
        self.engine.handle_backdrop_click(now())
    }

    #[wasm_bindgen]
    pub fn toggle_quick_questions(&mut self) -> bool {
        self.engine.toggle_quick_questions()
    }

    /// Fire due timers. Returns true if the page needs a re-render.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(now())
    }

    /// Absolute `Date.now()` time of the next timed transition
    #[wasm_bindgen]
    pub fn next_deadline(&self) -> Option<f64> {
        self.engine.next_deadline()
    }

    /// Fire due timers and return the render snapshot as JSON
    #[wasm_bindgen]
    pub fn view_json(&mut self) -> Result<String, JsValue> {
        let t = now();
        self.engine.view(t).to_json().map_err(to_js)
    }

    /// The page is unmounting; drop every pending timer
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.engine.unmount();
        log("[folio-desktop] unmounted");
    }
}
