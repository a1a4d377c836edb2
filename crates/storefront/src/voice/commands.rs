//! Spoken navigation commands.

/// One entry in the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCommand {
    /// Lowercase phrases; the transcript must contain one of them.
    pub phrases: &'static [&'static str],
    /// Spoken back when the command fires.
    pub confirmation: &'static str,
    /// Where to navigate, if anywhere.
    pub destination: Option<&'static str>,
}

/// Checked in order; the first command with a matching phrase wins.
pub const COMMANDS: &[VoiceCommand] = &[
    VoiceCommand {
        phrases: &["find washer", "find machine"],
        confirmation: "Taking you to the machines page",
        destination: Some("/machines"),
    },
    VoiceCommand {
        phrases: &["find detergent", "find deals"],
        confirmation: "Taking you to the deals page",
        destination: Some("/deals"),
    },
    VoiceCommand {
        phrases: &["check supplies", "supplies"],
        confirmation: "Taking you to the supplies page",
        destination: Some("/supplies"),
    },
    VoiceCommand {
        phrases: &["my orders", "order history"],
        confirmation: "Taking you to your orders",
        destination: Some("/orders"),
    },
    VoiceCommand {
        phrases: &["dashboard", "home"],
        confirmation: "Taking you to the dashboard",
        destination: Some("/dashboard"),
    },
    VoiceCommand {
        phrases: &["settings", "profile"],
        confirmation: "Taking you to settings",
        destination: Some("/settings"),
    },
    VoiceCommand {
        phrases: &["help"],
        confirmation: "You can ask me to find machines, check deals, view supplies, see your orders, go to dashboard, or open settings",
        destination: None,
    },
];

/// The first command whose phrase occurs in `transcript`, ignoring case.
#[must_use]
pub fn match_command(transcript: &str) -> Option<&'static VoiceCommand> {
    let spoken = transcript.to_lowercase();
    COMMANDS
        .iter()
        .find(|command| command.phrases.iter().any(|p| spoken.contains(p)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations() {
        let cases = [
            ("Find Washer near me", Some("/machines")),
            ("please find deals", Some("/deals")),
            ("how are my supplies", Some("/supplies")),
            ("show order history", Some("/orders")),
            ("go home", Some("/dashboard")),
            ("open my profile", Some("/settings")),
            ("help", None),
        ];
        for (spoken, destination) in cases {
            assert_eq!(match_command(spoken).unwrap().destination, destination, "{spoken}");
        }
    }

    #[test]
    fn test_earlier_command_wins() {
        // "my orders" would match later, but "supplies" comes first.
        let command = match_command("supplies in my orders").unwrap();
        assert_eq!(command.destination, Some("/supplies"));
    }

    #[test]
    fn test_no_match() {
        assert!(match_command("what's the weather").is_none());
        assert!(match_command("").is_none());
    }
}
