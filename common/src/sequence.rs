//! Most recent action wins.
//!
//! Every user action that starts asynchronous work takes a ticket from the
//! sequence of its flow. When the reply arrives it is applied only if its
//! ticket is still the latest one issued; replies of superseded actions are
//! dropped. Nothing is cancelled in flight.

/// Ticket of one started action.
pub type Ticket = u32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: Ticket,
}

impl RequestSequence {
    /// Starts a new action, superseding every earlier ticket.
    pub fn start(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut uploads = RequestSequence::default();
        let first = uploads.start();
        let second = uploads.start();

        assert!(!uploads.is_current(first));
        assert!(uploads.is_current(second));
    }

    #[test]
    fn late_reply_of_an_earlier_action_is_dropped() {
        let mut uploads = RequestSequence::default();
        let json_upload = uploads.start();
        let sheet_submit = uploads.start();

        // The sheet reply lands first, then the slower JSON read.
        assert!(uploads.is_current(sheet_submit));
        assert!(!uploads.is_current(json_upload));
    }

    #[test]
    fn flows_are_independent() {
        let mut uploads = RequestSequence::default();
        let mut generations = RequestSequence::default();
        let upload = uploads.start();
        let generation = generations.start();
        generations.start();

        assert!(uploads.is_current(upload));
        assert!(!generations.is_current(generation));
    }

    #[test]
    fn nothing_is_current_before_the_first_action() {
        let uploads = RequestSequence::default();
        assert!(!uploads.is_current(1));
    }

    #[test]
    fn ticket_wraps_around() {
        let mut uploads = RequestSequence {
            latest: Ticket::MAX,
        };
        let ticket = uploads.start();
        assert_eq!(ticket, 0);
        assert!(uploads.is_current(ticket));
        assert!(!uploads.is_current(Ticket::MAX));
    }
}
