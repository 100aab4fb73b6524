use crate::models::EmailSubmission;

/// Canned emails offered by the sample loader buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Phishing,
    Legitimate,
}

const PHISHING_BODY: &str = "Dear Valued Customer,

Your PayPal account has been temporarily suspended due to unusual activity. 

To restore access immediately, please verify your identity by clicking the link below:

http://paypa1-secure.com/verify-account?id=8472639

You have 24 hours to complete this verification or your account will be permanently closed.

If you did not request this, please ignore this message.

Best regards,
PayPal Security Team";

const LEGITIMATE_BODY: &str = "Hi there,

Your pull request #1234 in repository username/project has been successfully merged into the main branch.

You can view the merge commit here:
https://github.com/username/project/pull/1234

Thanks for your contribution!

Best,
The GitHub Team";

impl Sample {
    pub fn submission(&self) -> EmailSubmission {
        match self {
            Sample::Phishing => EmailSubmission::new(
                "security@paypa1-secure.com",
                "URGENT: Verify Your Account Now!",
                PHISHING_BODY,
            ),
            Sample::Legitimate => EmailSubmission::new(
                "notifications@github.com",
                "Your pull request was merged",
                LEGITIMATE_BODY,
            ),
        }
    }
}
