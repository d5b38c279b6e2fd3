//! Browser frontend: DOM wiring, frame loop and HUD updates

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use super::keymap::command_for_key;
use crate::renderer::CanvasRenderer;
use crate::sim::{Command, CommandQueue, FrameView, GameEvent, GameState, tick};

/// Simulated asset load time before the start button appears (ms)
const ASSET_DELAY_MS: i32 = 1000;

/// Game instance holding all state
struct Game {
    state: GameState,
    commands: CommandQueue,
    renderer: Option<CanvasRenderer>,
}

impl Game {
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            commands: CommandQueue::new(),
            renderer: None,
        }
    }

    /// Run one simulation step and draw it
    fn frame(&mut self, document: &Document) {
        tick(&mut self.state, &mut self.commands);

        for event in self.state.drain_events() {
            apply_event(document, event);
        }

        if let Some(ref renderer) = self.renderer {
            renderer.render(&FrameView::capture(&self.state));
        }
    }
}

fn set_display(document: &Document, id: &str, visible: bool) {
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let value = if visible { "block" } else { "none" };
        let _ = el.style().set_property("display", value);
    }
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Reflect a simulation event in the DOM
fn apply_event(document: &Document, event: GameEvent) {
    match event {
        GameEvent::Ready => {
            set_display(document, "preloader", false);
            set_display(document, "startButton", true);
        }
        GameEvent::GameStarted => {
            set_display(document, "startButton", false);
            set_display(document, "gameOver", false);
        }
        GameEvent::ScoreChanged(score) => {
            set_text(document, "score", &format!("Score: {}", score));
        }
        GameEvent::CoinCollected => {}
        GameEvent::GameOverEntered(score) => {
            set_display(document, "startButton", true);
            set_display(document, "gameOver", true);
            set_text(document, "finalScore", &score.to_string());
        }
    }
}

pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Street Runner starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let width = window.inner_width()?.as_f64().unwrap_or(800.0) as u32;
    let height = window.inner_height()?.as_f64().unwrap_or(600.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    if let Some(body) = document.body() {
        body.append_child(&canvas)?;
    }

    let seed = js_sys::Date::now() as u64;
    let game = Rc::new(RefCell::new(Game::new(seed)));
    log::info!("Game initialized with seed: {}", seed);

    {
        let mut g = game.borrow_mut();
        let tuning = &g.state.tuning;
        let renderer = CanvasRenderer::new(&canvas, tuning.initial_speed, tuning.max_speed)?;
        g.renderer = Some(renderer);
    }

    setup_input_handlers(&window, game.clone())?;
    setup_start_button(&document, game.clone())?;
    setup_resize(&window, canvas, game.clone())?;
    schedule_assets_ready(&window, game.clone())?;

    request_animation_frame(game);

    log::info!("Street Runner running!");
    Ok(())
}

fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        if let Some(command) = command_for_key(&event.key()) {
            event.prevent_default();
            game.borrow_mut().commands.push(command);
        }
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    if let Some(btn) = document.get_element_by_id("startButton") {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().commands.push(Command::StartOrRestart);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        log::warn!("No #startButton element; use Enter to start");
    }
    Ok(())
}

fn setup_resize(
    window: &web_sys::Window,
    canvas: HtmlCanvasElement,
    game: Rc<RefCell<Game>>,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        if let Some(renderer) = game.borrow_mut().renderer.as_mut() {
            renderer.resize(width, height);
        }
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Stand-in for asset loading: signal readiness after a short delay
fn schedule_assets_ready(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let closure = Closure::once(move || {
        game.borrow_mut().commands.push(Command::AssetsReady);
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ASSET_DELAY_MS,
    )?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        game.borrow_mut().frame(&document);
    }

    request_animation_frame(game);
}
