//! Target Rush entry point
//!
//! Browser: wires the canvas, HUD elements and restart button to the game
//! loop. Native: plays a headless autopilot run and prints its summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use target_rush::platform::web::{AnimationFrameScheduler, CanvasSurface, DomHud, ids};
    use target_rush::{Game, GameLoop, Settings};

    type WebLoop = GameLoop<CanvasSurface, DomHud, AnimationFrameScheduler>;

    fn new_seed(settings: &Settings) -> u64 {
        settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        if let Err(err) = console_log::init_with_level(settings.log_level()) {
            web_sys::console::warn_1(&format!("logger init failed: {}", err).into());
        }

        log::info!("Target Rush starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(ids::CANVAS)
            .ok_or("no canvas")?
            .dyn_into()?;

        // Width follows the layout, height is fixed
        canvas.set_width(canvas.offset_width().max(0) as u32);
        canvas.set_height(settings.play_area_height as u32);

        let seed = new_seed(&settings);
        let hud = DomHud::new(&document);
        let surface = CanvasSurface::new(canvas.clone());
        let game = Game::new(seed, surface, hud, settings);
        let scheduler = Rc::new(AnimationFrameScheduler::new(window));
        let game_loop = GameLoop::new(game, scheduler);

        setup_click_handler(&canvas, game_loop.clone())?;
        setup_restart_button(&document, game_loop.clone())?;

        game_loop.start();
        log::info!("Target Rush running!");
        Ok(())
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, game_loop: WebLoop) -> Result<(), JsValue> {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;
            if let Some(id) = game_loop.click(x, y) {
                log::debug!("hit target {} at ({:.0}, {:.0})", id, x, y);
            }
        });
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_restart_button(document: &web_sys::Document, game_loop: WebLoop) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id(ids::RESTART) else {
            log::warn!("no restart button in page");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let seed = new_seed(game_loop.game().borrow().settings());
            game_loop.restart(seed);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::rc::Rc;

    use target_rush::platform::{HeadlessSurface, ManualScheduler, RecordingHud};
    use target_rush::sim::Autopilot;
    use target_rush::{Game, GameLoop, Settings};

    /// Stop the demo even if the autopilot somehow never loses
    const MAX_FRAMES: usize = 1_000_000;
    const DEMO_WIDTH: f32 = 800.0;

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level().to_level_filter())
        .parse_default_env()
        .init();
    log::info!("Target Rush (native) starting...");
    log::info!("Native mode is a headless autopilot demo - build for wasm32 to play");

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|err| anyhow::anyhow!("invalid seed {:?}: {}", arg, err))?,
        None => settings.seed.unwrap_or(0x5eed),
    };

    let surface = HeadlessSurface::new(DEMO_WIDTH, settings.play_area_height);
    let game = Game::new(seed, surface, RecordingHud::default(), settings);
    let scheduler = Rc::new(ManualScheduler::new());
    let game_loop = GameLoop::new(game, Rc::clone(&scheduler));
    let mut autopilot = Autopilot::default();

    game_loop.start();
    let mut frames = 0;
    while frames < MAX_FRAMES && scheduler.advance() {
        frames += 1;
        let click = autopilot.next_click(game_loop.game().borrow().state());
        if let Some(point) = click {
            game_loop.click(point.x, point.y);
        }
    }

    let summary = game_loop.game().borrow().state().summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
