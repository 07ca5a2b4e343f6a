use crate::model::ResultMessage;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub result: Option<ResultMessage>,
    pub move_count: u32,
    pub play_again: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    let Some(result) = &props.result else {
        return html! {};
    };
    let play_again_btn = {
        let cb = props.play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:rgba(0,0,0,0.85); border:2px solid #d4af37; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
                <h2 style="margin:0 0 12px 0; color:#d4af37;">{ result.title.clone() }</h2>
                <p style="margin:4px 0;">{ result.message.clone() }</p>
                <p style="margin:4px 0; opacity:0.7; font-size:12px;">{ format!("Moves played: {}", props.move_count) }</p>
                <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                    <button onclick={play_again_btn}>{"Play Again"}</button>
                </div>
            </div>
        </div>
    }
}
