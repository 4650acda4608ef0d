use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub id: AttrValue,
    pub items: Vec<String>,
}

#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    html! {
        <ul id={props.id.clone()} style="padding-left:1.2em; color:#333;">
            { for props.items.iter().map(|item| html! { <li style="margin:0.3em 0;">{ item }</li> }) }
        </ul>
    }
}
