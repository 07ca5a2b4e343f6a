use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    board_view::BoardView, controls_panel::ControlsPanel, game_over_overlay::GameOverOverlay,
    player_card::PlayerCard, stats_panel::StatsPanel,
};
use crate::ai::request_ai_move;
use crate::config::GameConfig;
use crate::model::{GameAction, GameMode, GameState, Outcome, Player};
use crate::settings::Settings;
use crate::theme::ThemeId;
use crate::util::{clog, cwarn};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(GameConfig::load);
    let settings = use_state(Settings::load);
    let game = {
        let config = (*config).clone();
        let mode = settings.mode;
        use_reducer(move || GameState::new(mode, &config, js_sys::Date::now()))
    };
    let last_logged = use_mut_ref(|| (0u32, None::<Outcome>));

    // Persist settings changes
    {
        let settings = settings.clone();
        use_effect_with(*settings, move |s| {
            s.save();
            || ()
        });
    }
    // AI bridge: once per AI turn, after a short pause
    {
        let game = game.clone();
        let config = config.clone();
        let deps = (game.generation, game.move_count, game.current, game.is_over());
        use_effect_with(deps, move |&(generation, _, _, _)| {
            let mut pending: Option<Timeout> = None;
            if game.ai_to_move() && !game.ai_pending {
                let dispatcher = game.dispatcher();
                let board = game.board.clone();
                let mode = game.mode;
                let endpoint = config.ai_endpoint.clone();
                pending = Some(Timeout::new(config.ai_delay_ms, move || {
                    dispatcher.dispatch(GameAction::AiRequested { generation });
                    spawn_local(async move {
                        clog(&format!("requesting AI move ({})", mode));
                        match request_ai_move(&endpoint, &board, mode).await {
                            Ok(Some((row, col))) => {
                                clog(&format!("AI plays ({}, {})", row, col));
                                dispatcher.dispatch(GameAction::AiMove {
                                    generation,
                                    row,
                                    col,
                                    now_ms: js_sys::Date::now(),
                                });
                            }
                            Ok(None) => {
                                cwarn("AI returned no move");
                                dispatcher.dispatch(GameAction::AiFailed { generation });
                            }
                            Err(err) => {
                                cwarn(&format!("AI error: {}", err));
                                dispatcher.dispatch(GameAction::AiFailed { generation });
                            }
                        }
                    });
                }));
            }
            move || drop(pending)
        });
    }
    // Log moves and results
    {
        let last_logged = last_logged.clone();
        use_effect_with((game.move_count, game.outcome), move |&(moves, outcome)| {
            let mut prev = last_logged.borrow_mut();
            if prev.0 != moves && moves > 0 {
                clog(&format!("move {}", moves));
            }
            if prev.1 != outcome {
                if let Some(o) = outcome {
                    clog(&format!("game over: {:?}", o));
                }
            }
            *prev = (moves, outcome);
            || ()
        });
    }

    let on_mode = {
        let settings = settings.clone();
        let dispatcher = game.dispatcher();
        Callback::from(move |mode: GameMode| {
            settings.set(Settings { mode, ..*settings });
            dispatcher.dispatch(GameAction::SetMode {
                mode,
                now_ms: js_sys::Date::now(),
            });
        })
    };
    let on_theme = {
        let settings = settings.clone();
        Callback::from(move |theme: ThemeId| settings.set(Settings { theme, ..*settings }))
    };
    let reset = {
        let dispatcher = game.dispatcher();
        Callback::from(move |_| {
            dispatcher.dispatch(GameAction::Reset {
                now_ms: js_sys::Date::now(),
            })
        })
    };

    let card = |player: Player, accent: &'static str| {
        let remaining_ms = game.clock.remaining(player);
        html! { <PlayerCard
            title={game.player_title(player)}
            remaining_ms={remaining_ms}
            active={!game.is_over() && game.current == player}
            low_time={remaining_ms < config.low_time_ms}
            accent={accent}
        /> }
    };

    html! {
        <div id="root" style="min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:14px; padding:16px; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            <h1 style="margin:0; font-size:26px;">{"Gomoku"}</h1>
            <ControlsPanel
                mode={settings.mode}
                theme={settings.theme}
                on_mode={on_mode}
                on_theme={on_theme}
                on_new_game={reset.clone()}
            />
            <div style="display:flex; gap:16px;">
                { card(Player::One, "#00ff9c") }
                { card(Player::Two, "#58a6ff") }
            </div>
            <StatsPanel
                turn_banner={game.turn_banner()}
                highlight={!game.is_over() && game.current == Player::One}
                move_count={game.move_count}
            />
            <BoardView game={game.clone()} theme={settings.theme} tick_ms={config.tick_ms} />
            <GameOverOverlay result={game.result()} move_count={game.move_count} play_again={reset} />
        </div>
    }
}
