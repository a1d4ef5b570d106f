use yew::prelude::*;

use super::{game_controls::GameControls, idle_state::IdleState, start_prompt::StartPrompt};
use crate::config::Tuning;
use crate::driver::FrameLoop;
use crate::engine::Game;
use crate::model::{FIELD_HEIGHT, FIELD_WIDTH, GameType};
use crate::state::{Session, SessionAction};
use crate::util::browser_seed;

#[derive(Properties, PartialEq, Clone)]
pub struct GameWindowProps {
    pub active: bool,
    pub description: String,
}

#[function_component(GameWindow)]
pub fn game_window(props: &GameWindowProps) -> Html {
    let session = use_reducer(Session::default);
    let canvas_ref = use_node_ref();
    let game = use_mut_ref(|| Game::new(GameType::default(), Tuning::from_document(), browser_seed()));

    // Effect: upstream description changed
    {
        let session = session.clone();
        use_effect_with(
            (props.active, props.description.clone()),
            move |(active, description)| {
                session.dispatch(SessionAction::Describe {
                    active: *active,
                    description: description.clone(),
                });
                || ()
            },
        );
    }
    // Effect: fresh round on every run id
    {
        let game = game.clone();
        let game_type = session.game_type;
        use_effect_with(session.run_id, move |_| {
            game.borrow_mut().restart(game_type);
            || ()
        });
    }
    // Effect: frame loop lives exactly as long as (playing, run_id) is unchanged
    {
        let game = game.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with((session.playing, session.run_id), move |(playing, _)| {
            let frame_loop = if *playing {
                match FrameLoop::start(canvas_ref, game) {
                    Ok(l) => Some(l),
                    Err(e) => {
                        log::error!("could not start frame loop: {:?}", e);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(frame_loop)
        });
    }

    if !session.active {
        return html! { <IdleState /> };
    }

    let toggle_play_cb: Callback<()> = {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(SessionAction::TogglePlay))
    };
    let play_cb: Callback<()> = {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(SessionAction::Play))
    };
    let reset_cb: Callback<()> = {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(SessionAction::Reset))
    };

    html! {<div class="card" style="height:100%; display:flex; flex-direction:column;">
        <GameControls title={session.title.clone()} playing={session.playing} on_toggle_play={toggle_play_cb} on_reset={reset_cb} />
        <div style="flex:1; position:relative; padding:12px; display:flex; align-items:center; justify-content:center;">
            {
                if session.playing {
                    html! { <canvas
                        ref={canvas_ref.clone()}
                        width={FIELD_WIDTH.to_string()}
                        height={FIELD_HEIGHT.to_string()}
                        tabindex="0"
                        style="display:block; width:100%; max-width:800px; aspect-ratio:4 / 3; border-radius:6px; background:#000;"
                    ></canvas> }
                } else {
                    html! { <StartPrompt game_type={session.game_type} title={session.title.clone()} on_play={play_cb} /> }
                }
            }
        </div>
    </div>}
}
