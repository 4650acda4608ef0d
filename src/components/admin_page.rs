use yew::prelude::*;

use super::{ItemList, BUTTON_STYLE, INPUT_STYLE, SECONDARY_BUTTON_STYLE};
use crate::types::{DEFAULT_DIFFICULTY, DIFFICULTIES};
use crate::view::{Field, ListTarget};

#[derive(Properties, PartialEq)]
pub struct AdminPageProps {
    pub users: Vec<String>,
    pub new_question: NodeRef,
    pub difficulty: NodeRef,
    pub upload: NodeRef,
    pub on_add: Callback<MouseEvent>,
    pub on_upload: Callback<MouseEvent>,
    pub on_refresh: Callback<MouseEvent>,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminPageProps) -> Html {
    html! {
        <div class="admin-page" style="display:flex; flex-direction:column; gap:1.5em;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0; color:#555;">{ "Admin Dashboard" }</h2>
                <button onclick={props.on_logout.clone()} style={SECONDARY_BUTTON_STYLE}>{ "Logout" }</button>
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style="font-weight:bold; color:#555;">{ "New Question:" }</label>
                <input
                    id={Field::NewQuestion.id()}
                    ref={props.new_question.clone()}
                    type="text"
                    placeholder="Enter a question"
                    style={INPUT_STYLE}
                />
                <label style="font-weight:bold; color:#555;">{ "Difficulty:" }</label>
                <select id={Field::Difficulty.id()} ref={props.difficulty.clone()} style={INPUT_STYLE}>
                    { for DIFFICULTIES.iter().map(|level| html! {
                        <option value={*level} selected={*level == DEFAULT_DIFFICULTY}>{ *level }</option>
                    })}
                </select>
                <button onclick={props.on_add.clone()} style={BUTTON_STYLE}>{ "Add Question" }</button>
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style="font-weight:bold; color:#555;">{ "Bulk Upload (CSV or PDF):" }</label>
                <input type="file" accept=".csv,.pdf" ref={props.upload.clone()} style={INPUT_STYLE} />
                <button onclick={props.on_upload.clone()} style={BUTTON_STYLE}>{ "Upload Questions" }</button>
            </div>

            <div>
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; color:#555;">{ "Users" }</h3>
                    <button onclick={props.on_refresh.clone()} style={SECONDARY_BUTTON_STYLE}>{ "Refresh" }</button>
                </div>
                <ItemList id={ListTarget::Users.id()} items={props.users.clone()} />
            </div>
        </div>
    }
}
