use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub turn_banner: &'static str,
    pub highlight: bool,
    pub move_count: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let banner_color = if props.highlight { "#00ff9c" } else { "#ffffff" };
    html! {
        <div style="display:flex; justify-content:space-between; align-items:center; gap:16px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 14px; font-size:14px;">
            <span style={format!("font-weight:600; color:{};", banner_color)}>{ props.turn_banner }</span>
            <span>
                {"Moves: "}
                <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ props.move_count }</span>
            </span>
        </div>
    }
}
