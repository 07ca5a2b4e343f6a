use crate::util::format_clock;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerCardProps {
    pub title: String,
    pub remaining_ms: f64,
    /// This player is to move.
    pub active: bool,
    pub low_time: bool,
    pub accent: &'static str,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let border = if props.active { props.accent } else { "#30363d" };
    let glow = if props.active {
        format!("box-shadow:0 0 12px {};", props.accent)
    } else {
        String::new()
    };
    let timer_color = if props.low_time { "#f85149" } else { "#e6edf3" };
    html! {
        <div style={format!("background:rgba(22,27,34,0.9); border:2px solid {}; border-radius:10px; padding:10px 16px; min-width:150px; display:flex; flex-direction:column; align-items:center; gap:6px; {}", border, glow)}>
            <div style="font-size:14px; font-weight:600;">{ props.title.clone() }</div>
            <div style={format!("font-size:24px; font-weight:700; font-variant-numeric:tabular-nums; color:{};", timer_color)}>
                { format_clock(props.remaining_ms) }
            </div>
        </div>
    }
}
