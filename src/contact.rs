use std::time::Duration;

pub const SEND_DELAY: Duration = Duration::from_millis(1_500);
pub const SUCCESS_HOLD: Duration = Duration::from_millis(3_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Success => "success",
        }
    }

    /// Submit stays enabled after a send completes; only an in-flight send blocks it.
    pub fn accepts_submit(self) -> bool {
        !matches!(self, Self::Sending)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
        }
    }

    /// The timed step that must fire after entering this status, if any.
    pub fn follow_up(self) -> Option<FollowUp> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(FollowUp {
                after: SEND_DELAY,
                action: ContactAction::Delivered,
            }),
            Self::Success => Some(FollowUp {
                after: SUCCESS_HOLD,
                action: ContactAction::Settled,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(Field, String),
    Submit,
    /// Simulated delivery finished.
    Delivered,
    /// Success banner has been shown long enough.
    Settled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub after: Duration,
    pub action: ContactAction,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn apply(&self, action: ContactAction) -> Self {
        let mut next = self.clone();

        match action {
            ContactAction::Edit(field, value) => {
                *next.draft.slot(field) = value;
            }
            ContactAction::Submit => {
                if self.status.accepts_submit() {
                    next.status = SubmissionStatus::Sending;
                }
            }
            ContactAction::Delivered => {
                if self.status == SubmissionStatus::Sending {
                    next.draft = ContactDraft::default();
                    next.status = SubmissionStatus::Success;
                }
            }
            ContactAction::Settled => {
                if self.status == SubmissionStatus::Success {
                    next.status = SubmissionStatus::Idle;
                }
            }
        }

        next
    }
}
