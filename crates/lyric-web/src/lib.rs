pub mod runner;

pub use lyric_engine;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, data loading, input handlers, state accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// lyric_web::export_game!(MyGame, "my-game");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `js-sys`, `web-sys`
/// (feature `console`), `log`, `console_log` and `console_error_panic_hook`.
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `lyric_engine::Game`
/// - `$game_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::lyric_engine::{InputEvent, LineIndex};

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` against the runner. Before `game_init()` there is no runner
        /// and no logger, so complain on the raw console and return `None`.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        web_sys::console::warn_1(&JsValue::from_str(concat!(
                            $game_name,
                            ": not initialized, call game_init() first"
                        )));
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
        }

        /// Asset path the JS loader should fetch the data file from.
        #[wasm_bindgen]
        pub fn game_data_path() -> String {
            with_runner(|r| r.config().data_path.clone()).unwrap_or_default()
        }

        /// Hand the fetched data file to the game. An error means the game
        /// cannot start; the loader should tell the user.
        #[wasm_bindgen]
        pub fn game_load_data(json: &str) -> Result<(), JsValue> {
            let result = with_runner(|r| r.load_data(json))
                .ok_or_else(|| JsValue::from_str("game not initialized"))?;
            match result {
                Ok(()) => {
                    log::info!("{}: data loaded", $game_name);
                    Ok(())
                }
                Err(err) => {
                    log::error!("{}: {}", $game_name, err);
                    Err(JsValue::from_str(&err.to_string()))
                }
            }
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_start() {
            with_runner(|r| r.dispatch(InputEvent::StartRequested));
        }

        #[wasm_bindgen]
        pub fn game_line_clicked(index: u32) {
            with_runner(|r| r.dispatch(InputEvent::LineClicked(LineIndex(index as usize))));
        }

        #[wasm_bindgen]
        pub fn game_video_ended() {
            with_runner(|r| r.dispatch(InputEvent::VideoEnded));
        }

        #[wasm_bindgen]
        pub fn game_restart() {
            with_runner(|r| r.dispatch(InputEvent::RestartRequested));
        }

        // ---- State accessors ----

        /// Full `ViewState` as JSON (`null` before data is loaded).
        #[wasm_bindgen]
        pub fn get_view() -> String {
            with_runner(|r| r.view_json()).unwrap_or_else(|| "null".to_string())
        }

        /// Pending `GameEvent`s as a JSON array. Clears them.
        #[wasm_bindgen]
        pub fn get_events() -> String {
            with_runner(|r| r.events_json()).unwrap_or_else(|| "[]".to_string())
        }

        #[wasm_bindgen]
        pub fn get_tu_names() -> js_sys::Array {
            with_runner(|r| names_array(r, |names| &names.tu)).unwrap_or_else(js_sys::Array::new)
        }

        #[wasm_bindgen]
        pub fn get_jo_names() -> js_sys::Array {
            with_runner(|r| names_array(r, |names| &names.jo)).unwrap_or_else(js_sys::Array::new)
        }

        fn names_array(
            runner: &$crate::GameRunner<$game_type>,
            pick: impl Fn(&$crate::lyric_engine::NameSetState) -> &$crate::lyric_engine::NameSet,
        ) -> js_sys::Array {
            let array = js_sys::Array::new();
            if let Some(session) = runner.session() {
                for name in pick(session.names()).iter() {
                    array.push(&JsValue::from_str(name));
                }
            }
            array
        }

        /// Names, history and phase as JSON, for poking at from the console.
        #[wasm_bindgen]
        pub fn get_debug_state() -> String {
            with_runner(|r| r.debug_json()).unwrap_or_else(|| "null".to_string())
        }
    };
}
