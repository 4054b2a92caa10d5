/// What an update notification is about. The caller picks the variant;
/// nothing downstream inspects concrete entity types to choose wording.
#[derive(Debug, Clone)]
pub enum NotificationKind {
    ProjectAdded { title: String },
    NewsPosted { title: String },
    EventPosted { title: String },
}

impl NotificationKind {
    pub fn subject(&self) -> &'static str {
        "New Update Available"
    }

    pub fn message(&self) -> String {
        match self {
            NotificationKind::ProjectAdded { title } => {
                format!("A new project \"{}\" has been added. Check it out!", title)
            }
            NotificationKind::NewsPosted { title } => {
                format!("A new news item \"{}\" has been added.", title)
            }
            NotificationKind::EventPosted { title } => {
                format!("A new event \"{}\" has been added.", title)
            }
        }
    }

    pub fn html(&self, subscriber_name: &str) -> String {
        format!(
            "<p>Hello {},</p><p>{}</p><p>You are receiving this because you subscribed to portal updates.</p>",
            subscriber_name,
            self.message()
        )
    }
}

/// Confirmation sent when someone signs up for update emails.
pub fn subscription_confirmation_html(subscriber_name: &str) -> String {
    format!(
        "<p>Hello {},</p><p>Thank you for subscribing! You will receive our latest updates.</p>",
        subscriber_name
    )
}

/// Confirmation sent when a paid membership is activated or renewed.
pub fn membership_confirmation_html(first_name: &str, end_date: &str) -> String {
    format!(
        "<p>Hello {},</p><p>Payment successful. Your subscription is active until {}.</p>",
        first_name, end_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_renders_its_own_message() {
        let project = NotificationKind::ProjectAdded {
            title: "Solar Dryer".to_string(),
        };
        assert_eq!(
            project.message(),
            "A new project \"Solar Dryer\" has been added. Check it out!"
        );

        let news = NotificationKind::NewsPosted {
            title: "Open Day".to_string(),
        };
        assert_eq!(news.message(), "A new news item \"Open Day\" has been added.");

        let event = NotificationKind::EventPosted {
            title: "Expo 2026".to_string(),
        };
        assert_eq!(event.message(), "A new event \"Expo 2026\" has been added.");
    }

    #[test]
    fn html_greets_the_subscriber_by_name() {
        let kind = NotificationKind::NewsPosted {
            title: "Open Day".to_string(),
        };
        let html = kind.html("Wanjiku");
        assert!(html.contains("Hello Wanjiku"));
        assert!(html.contains("Open Day"));
    }
}
