use yew::prelude::*;

use super::{ItemList, BUTTON_STYLE, INPUT_STYLE, SECONDARY_BUTTON_STYLE};
use crate::browser::PageModel;
use crate::view::{Field, ListTarget};

#[derive(Properties, PartialEq)]
pub struct UserPageProps {
    pub model: PageModel,
    pub answer: NodeRef,
    pub on_submit: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_history: Callback<MouseEvent>,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(UserPage)]
pub fn user_page(props: &UserPageProps) -> Html {
    let model = &props.model;

    html! {
        <div class="user-page" style="display:flex; flex-direction:column; gap:1em;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0; color:#555;">
                    { "Welcome, " }<span id="user-name">{ &model.display_name }</span>
                </h2>
                <button onclick={props.on_logout.clone()} style={SECONDARY_BUTTON_STYLE}>{ "Logout" }</button>
            </div>

            <div
                id="question-box"
                data-qid={model.pending_question_id.clone()}
                style="padding:1em; background:#fff; border:1px solid #ddd; border-radius:4px;"
            >
                <p id="question" style="margin:0; font-size:1.1em;">{ &model.question }</p>
            </div>

            <input
                id={Field::Answer.id()}
                ref={props.answer.clone()}
                type="text"
                placeholder="Type your answer..."
                style={INPUT_STYLE}
            />
            <div style="display:flex; gap:0.5em;">
                <button onclick={props.on_submit.clone()} style={BUTTON_STYLE}>{ "Submit Answer" }</button>
                <button onclick={props.on_next.clone()} style={SECONDARY_BUTTON_STYLE}>{ "Next Question" }</button>
            </div>

            <div style="margin-top:1em;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; color:#555;">{ "Your History" }</h3>
                    <button onclick={props.on_history.clone()} style={SECONDARY_BUTTON_STYLE}>{ "Load History" }</button>
                </div>
                <ItemList id={ListTarget::History.id()} items={model.history.clone()} />
            </div>
        </div>
    }
}
