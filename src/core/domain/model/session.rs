/// A session ticket obtained by authenticating against a cluster endpoint.
///
/// Tickets are scoped to a single registration or aggregation operation and
/// are never persisted, cached, or reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTicket {
    ticket: String,
    csrf_token: Option<String>,
}

impl SessionTicket {
    pub fn new(ticket: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            ticket: ticket.into(),
            csrf_token,
        }
    }

    /// Returns the raw ticket value.
    #[must_use]
    pub fn ticket(&self) -> &str {
        &self.ticket
    }

    /// Returns the CSRF prevention token, if the remote issued one.
    ///
    /// Only required by Proxmox for mutating verbs; every operation this
    /// crate performs is a read.
    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// Formats the ticket as a `Cookie` header value.
    #[must_use]
    pub fn as_cookie_header(&self) -> String {
        format!("PVEAuthCookie={}", self.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_carries_the_ticket() {
        let session = SessionTicket::new("PVE:root@pam:4EEC61E2::sig", None);
        assert_eq!(
            session.as_cookie_header(),
            "PVEAuthCookie=PVE:root@pam:4EEC61E2::sig"
        );
        assert_eq!(session.csrf_token(), None);
    }
}
