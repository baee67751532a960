//! Rendering of the two outbound emails for a submission.

use askama::Template;

use crate::Submission;

/// A rendered outbound email, ready to hand to the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub html_body: String,
}

#[derive(Template)]
#[template(path = "emails/contact_notification.html")]
struct NotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message_html: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact_auto_reply.html")]
struct AutoReplyTemplate<'a> {
    name: &'a str,
    subject: &'a str,
    message_html: &'a str,
    team_name: &'a str,
}

/// Escape markup and render newlines as `<br>` so free-form message text
/// keeps its line structure inside the HTML body.
fn html_linebreaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            // CRLF collapses to a single break.
            '\r' => {}
            '\n' => out.push_str("<br>"),
            c => out.push(c),
        }
    }
    out
}

/// The email forwarded to the administrator inbox.
pub fn notification(submission: &Submission) -> anyhow::Result<Email> {
    let message_html = html_linebreaks(&submission.message);
    let html_body = NotificationTemplate {
        name: &submission.name,
        email: &submission.email,
        subject: &submission.subject,
        message_html: &message_html,
    }
    .render()?;

    Ok(Email {
        subject: format!("Contact Form: {}", submission.subject),
        html_body,
    })
}

/// The acknowledgement sent back to the submitter.
///
/// `team_name` signs the closing line; deployments configure it instead of
/// shipping the generic default.
pub fn auto_reply(submission: &Submission, team_name: &str) -> anyhow::Result<Email> {
    let message_html = html_linebreaks(&submission.message);
    let html_body = AutoReplyTemplate {
        name: &submission.name,
        subject: &submission.subject,
        message_html: &message_html,
        team_name,
    }
    .render()?;

    Ok(Email {
        subject: format!("Thank you for contacting us - {}", submission.subject),
        html_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linebreaks_replaces_newlines() {
        assert_eq!(
            html_linebreaks("How much?\nAny discounts?"),
            "How much?<br>Any discounts?"
        );
    }

    #[test]
    fn linebreaks_collapses_crlf() {
        assert_eq!(html_linebreaks("a\r\nb"), "a<br>b");
    }

    #[test]
    fn linebreaks_escapes_markup() {
        assert_eq!(
            html_linebreaks("<script>&\"</script>"),
            "&lt;script&gt;&amp;&quot;&lt;/script&gt;"
        );
    }
}
