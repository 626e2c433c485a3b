use super::content::PROFILE;

pub const DEFAULT_SUBJECT: &str = "Project Inquiry";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl ValidationError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "Please tell me your name.",
            ValidationError::MissingEmail => "An email address is required.",
            ValidationError::InvalidEmail => "That email address does not look right.",
            ValidationError::MissingMessage => "The message is empty.",
        }
    }
}

impl ContactMessage {
    /// Trims every field and checks the required ones. A blank subject falls
    /// back to the default.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let subject = match self.subject.trim() {
            "" => DEFAULT_SUBJECT.to_string(),
            s => s.to_string(),
        };
        let message = self.message.trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "*New Portfolio Inquiry*\n\n*Name:* {}\n*Email:* {}\n*Subject:* {}\n*Message:* {}",
            self.name, self.email, self.subject, self.message
        )
    }

    /// Deep link that hands the message off to WhatsApp.
    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            PROFILE.whatsapp,
            urlencoding::encode(&self.body())
        )
    }
}
