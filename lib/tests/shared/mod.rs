use ngidx::{ExtractError, Field, Fields};

#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub phone: Option<String>,
    pub name: Option<String>,
    pub last_message: Option<String>,
    pub status: Option<String>,
}

impl Conversation {
    fn new(phone: &str, name: Option<&str>, last_message: &str, status: Option<&str>) -> Self {
        Self {
            phone: Some(phone.to_string()),
            name: name.map(String::from),
            last_message: Some(last_message.to_string()),
            status: status.map(String::from),
        }
    }
}

pub fn fields(conversation: &Conversation) -> Fields {
    vec![
        Field::from(&conversation.phone),
        Field::from(&conversation.name),
        Field::from(&conversation.last_message),
        Field::from(&conversation.status),
    ]
}

pub fn fallback(conversation: &Conversation) -> Result<Fields, ExtractError> {
    Ok(fields(conversation))
}

pub fn get_test_corpus() -> Vec<Conversation> {
    vec![
        Conversation::new("+919812345670", Some("Priya Sharma"), "Is the MBA intake still open?", Some("Hot")),
        Conversation::new("+919876500011", Some("Rahul Verma"), "Please call me tomorrow", Some("Cold")),
        Conversation::new("+14155550123", None, "Fee structure for B.Tech?", Some("New")),
        Conversation::new("+447700900123", Some("Amelia Brown"), "Thanks, applied already", None),
        Conversation::new("+919812300000", Some("Priyanka Rao"), "Hostel availability", Some("Warm")),
        Conversation::new("+61491570156", Some("Jo"), "ok", Some("Hot")),
    ]
}
