//! Issuer and customer profiles.

use serde::{Deserialize, Serialize};

/// One party on a document: the issuing account's profile or the customer.
///
/// The fiscal registration fields (`rc_number`, `nif`, `nis`, `ai`) are the
/// registration identifiers the issuing jurisdiction requires on printed
/// documents; all are optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub company_name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub rc_number: Option<String>,
    pub nif: Option<String>,
    pub nis: Option<String>,
    pub ai: Option<String>,
}

impl Party {
    /// Minimal profile with just a company name.
    pub fn named(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            contact_name: None,
            email: None,
            phone: None,
            address: None,
            city: None,
            rc_number: None,
            nif: None,
            nis: None,
            ai: None,
        }
    }

    /// The printable block for this party, one entry per line, holes
    /// omitted. The company name always comes first.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = vec![self.company_name.clone()];
        if let Some(contact) = &self.contact_name {
            lines.push(contact.clone());
        }
        if let Some(address) = &self.address {
            lines.push(address.clone());
        }
        if let Some(city) = &self.city {
            lines.push(city.clone());
        }
        if let Some(phone) = &self.phone {
            lines.push(format!("Tel: {phone}"));
        }
        if let Some(email) = &self.email {
            lines.push(email.clone());
        }
        if let Some(rc) = &self.rc_number {
            lines.push(format!("RC: {rc}"));
        }
        if let Some(nif) = &self.nif {
            lines.push(format!("NIF: {nif}"));
        }
        if let Some(nis) = &self.nis {
            lines.push(format!("NIS: {nis}"));
        }
        if let Some(ai) = &self.ai {
            lines.push(format!("AI: {ai}"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lines_skip_missing_fields() {
        let party = Party::named("Acme SARL");
        assert_eq!(party.display_lines(), vec!["Acme SARL".to_string()]);
    }

    #[test]
    fn display_lines_label_registrations() {
        let party = Party {
            contact_name: Some("A. Benali".to_string()),
            nif: Some("0999 1234".to_string()),
            ..Party::named("Acme SARL")
        };
        assert_eq!(
            party.display_lines(),
            vec![
                "Acme SARL".to_string(),
                "A. Benali".to_string(),
                "NIF: 0999 1234".to_string(),
            ]
        );
    }
}
