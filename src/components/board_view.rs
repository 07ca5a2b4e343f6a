use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::config::CANVAS_SIZE_PX;
use crate::model::{GameAction, GameState};
use crate::render;
use crate::theme::ThemeId;
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game: UseReducerHandle<GameState>,
    pub theme: ThemeId,
    pub tick_ms: u32,
}

/// The board canvas. Owns the click listener and the clock interval; the
/// board is repainted whenever the game version or theme changes.
#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let game_ref = use_mut_ref(|| props.game.clone());
    let theme_ref = use_mut_ref(|| props.theme);

    // Effect: track latest handle/theme and repaint
    {
        let game_ref = game_ref.clone();
        let theme_ref = theme_ref.clone();
        let draw_ref = draw_ref.clone();
        let current_handle = props.game.clone();
        let theme = props.theme;
        use_effect_with((props.game.version, theme), move |_| {
            *game_ref.borrow_mut() = current_handle;
            *theme_ref.borrow_mut() = theme;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Main mount effect (listener, clock)
    {
        let canvas_ref = canvas_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        let dispatcher = props.game.dispatcher();
        let tick_ms = props.tick_ms;
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        Some(c) => c,
                        None => return,
                    };
                    let handle = game_ref.borrow();
                    let theme = theme_ref.borrow().theme();
                    if let Err(err) = render::draw_board(&ctx, &handle.board, handle.last_move, theme) {
                        cwarn(&format!("board draw failed: {:?}", err));
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Click -> cell, corrected for CSS scaling of the canvas
            let click_cb = {
                let canvas = canvas.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let rect = canvas.get_bounding_client_rect();
                    if rect.width() <= 0.0 || rect.height() <= 0.0 {
                        return;
                    }
                    let scale_x = canvas.width() as f64 / rect.width();
                    let scale_y = canvas.height() as f64 / rect.height();
                    let x = e.client_x() as f64 - rect.left();
                    let y = e.client_y() as f64 - rect.top();
                    if let Some(pos) = render::cell_at(x, y, scale_x, scale_y) {
                        dispatcher.dispatch(GameAction::Click {
                            pos,
                            now_ms: js_sys::Date::now(),
                        });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .unwrap();

            // Clock interval
            let clock_tick = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move || {
                    dispatcher.dispatch(GameAction::Tick {
                        now_ms: js_sys::Date::now(),
                    });
                }) as Box<dyn FnMut()>)
            };
            let clock_tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    clock_tick.as_ref().unchecked_ref(),
                    tick_ms as i32,
                )
                .unwrap();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "click",
                    click_cb.as_ref().unchecked_ref(),
                );
                window_clone.clear_interval_with_handle(clock_tick_id);
                *draw_ref_setup.borrow_mut() = None;
                let _keep_alive = (&click_cb, &clock_tick);
            }
        });
    }

    let size = CANVAS_SIZE_PX as u32;
    html! {
        <canvas
            ref={canvas_ref}
            width={size.to_string()}
            height={size.to_string()}
            style="max-width:100%; height:auto; border-radius:6px; box-shadow:0 8px 24px rgba(0,0,0,0.45); cursor:pointer;"
        />
    }
}
