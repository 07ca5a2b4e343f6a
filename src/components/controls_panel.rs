use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::model::GameMode;
use crate::theme::ThemeId;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub mode: GameMode,
    pub theme: ThemeId,
    pub on_mode: Callback<GameMode>,
    pub on_theme: Callback<ThemeId>,
    pub on_new_game: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let mode_cb = {
        let cb = props.on_mode.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(mode) = select.value().parse::<GameMode>() {
                cb.emit(mode);
            }
        })
    };
    let theme_cb = {
        let cb = props.on_theme.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(theme) = select.value().parse::<ThemeId>() {
                cb.emit(theme);
            }
        })
    };
    let new_game_cb = {
        let cb = props.on_new_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; align-items:center; gap:12px; flex-wrap:wrap; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px;">
        <label style="display:flex; align-items:center; gap:6px;">
            <span>{"Mode"}</span>
            <select onchange={mode_cb}>
                { for GameMode::ALL.iter().map(|m| html!{
                    <option value={m.as_str()} selected={*m == props.mode}>{ m.label() }</option>
                }) }
            </select>
        </label>
        <label style="display:flex; align-items:center; gap:6px;">
            <span>{"Theme"}</span>
            <select onchange={theme_cb}>
                { for ThemeId::ALL.iter().map(|t| html!{
                    <option value={t.as_str()} selected={*t == props.theme}>{ t.label() }</option>
                }) }
            </select>
        </label>
        <button onclick={new_game_cb}>{"New Game"}</button>
    </div>}
}
