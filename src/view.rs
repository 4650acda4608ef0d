use crate::router::Route;

/// Input fields the flows read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LoginUsername,
    LoginPassword,
    SignupUsername,
    SignupPassword,
    Answer,
    NewQuestion,
    Difficulty,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::LoginUsername,
        Field::LoginPassword,
        Field::SignupUsername,
        Field::SignupPassword,
        Field::Answer,
        Field::NewQuestion,
        Field::Difficulty,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Field::LoginUsername => "login-username",
            Field::LoginPassword => "login-password",
            Field::SignupUsername => "signup-username",
            Field::SignupPassword => "signup-password",
            Field::Answer => "answer",
            Field::NewQuestion => "new-question",
            Field::Difficulty => "difficulty",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListTarget {
    History,
    Users,
}

impl ListTarget {
    pub fn id(&self) -> &'static str {
        match self {
            ListTarget::History => "history",
            ListTarget::Users => "user-list",
        }
    }
}

/// The page surface the flows drive: blocking alerts, navigation, form
/// fields, the question box and the two lists.
pub trait View {
    fn alert(&self, message: &str);
    fn navigate(&self, route: Route);

    fn field_value(&self, field: Field) -> String;
    fn clear_field(&self, field: Field);

    fn set_display_name(&self, name: &str);
    fn show_question(&self, text: &str);
    fn pending_question_id(&self) -> String;
    fn set_pending_question_id(&self, id: &str);

    /// Replaces the whole list.
    fn render_list(&self, target: ListTarget, items: Vec<String>);
}
