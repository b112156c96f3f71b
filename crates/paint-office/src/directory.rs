//! Resolves the by-name links an invoice carries into company tree records.
//!
//! Invoices store the company name and property address as plain text, so a renamed or
//! deleted company leaves the invoice pointing at nothing. Resolution never fails: a
//! missing match yields a placeholder named after what the invoice recorded.

use serde::Serialize;

use crate::records::{Company, Invoice, MyCompanyInfo, Property, Supervisor};

/// Company tree snapshot used to resolve invoice links.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    companies: Vec<Company>,
}

/// The company, supervisor, and property an invoice refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLinks {
    pub company: Company,
    pub supervisor: Supervisor,
    pub property: Property,
    /// False when any link fell back to a placeholder.
    pub resolved: bool,
}

impl Directory {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// The company with exactly this name, or a placeholder carrying only the name.
    pub fn find_company(&self, name: &str) -> Company {
        self.lookup_company(name)
            .cloned()
            .unwrap_or_else(|| Company::placeholder(name))
    }

    /// First supervisor in `company_name` owning a property at `address`, with that property.
    pub fn find_placement(
        &self,
        company_name: &str,
        address: &str,
    ) -> Option<(&Supervisor, &Property)> {
        let company = self.lookup_company(company_name)?;
        company.supervisors.iter().find_map(|supervisor| {
            supervisor
                .properties
                .iter()
                .find(|property| property.address.as_deref() == Some(address))
                .map(|property| (supervisor, property))
        })
    }

    pub fn resolve(&self, invoice: &Invoice) -> InvoiceLinks {
        let company = self.find_company(&invoice.company_name);
        let placement = self.find_placement(&invoice.company_name, &invoice.property_address);
        let resolved = company.id != 0 && placement.is_some();

        // Unmatched placements fall back to placeholders named after the company.
        let (supervisor, property) = match placement {
            Some((supervisor, property)) => (supervisor.clone(), property.clone()),
            None => (
                Supervisor::placeholder(&invoice.company_name),
                Property::placeholder(&invoice.company_name),
            ),
        };

        InvoiceLinks {
            company,
            supervisor,
            property,
            resolved,
        }
    }

    /// Supervisor name for an invoice, used by the aging report's supervisor filter.
    pub fn supervisor_name(&self, invoice: &Invoice) -> Option<&str> {
        self.find_placement(&invoice.company_name, &invoice.property_address)
            .map(|(supervisor, _)| supervisor.name.as_str())
    }

    fn lookup_company(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|company| company.name == name)
    }
}

/// Everything needed to print one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    pub invoice_number: i32,
    pub issuer: MyCompanyInfo,
    pub invoice: Invoice,
    pub company: Company,
    pub supervisor: Supervisor,
    pub property: Property,
    pub total_paid: i64,
    pub balance: i64,
    pub settled: bool,
}

impl InvoiceDocument {
    pub fn assemble(directory: &Directory, issuer: MyCompanyInfo, invoice: Invoice) -> Self {
        let InvoiceLinks {
            mut company,
            supervisor,
            property,
            ..
        } = directory.resolve(&invoice);
        // The document only needs the billing company, not its whole tree.
        company.supervisors.clear();

        Self {
            invoice_number: invoice.invoice_number(),
            total_paid: invoice.total_paid(),
            balance: invoice.balance(),
            settled: invoice.is_settled(),
            issuer,
            invoice,
            company,
            supervisor,
            property,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn property(id: i32, supervisor_id: i32, address: &str) -> Property {
        Property {
            id,
            supervisor_id,
            name: format!("Building {id}"),
            address: Some(address.to_string()),
            ..Property::default()
        }
    }

    fn directory() -> Directory {
        Directory::new(vec![
            Company {
                id: 1,
                name: "Acme Property Group".to_string(),
                supervisors: vec![
                    Supervisor {
                        id: 10,
                        company_id: 1,
                        name: "Dana Reyes".to_string(),
                        properties: vec![property(100, 10, "12 Oak Ave")],
                        ..Supervisor::default()
                    },
                    Supervisor {
                        id: 11,
                        company_id: 1,
                        name: "Sam Ortiz".to_string(),
                        properties: vec![property(101, 11, "88 Pine St")],
                        ..Supervisor::default()
                    },
                ],
                ..Company::default()
            },
            Company {
                id: 2,
                name: "Harbor Rentals".to_string(),
                supervisors: vec![Supervisor {
                    id: 20,
                    company_id: 2,
                    name: "Lee Park".to_string(),
                    properties: vec![property(200, 20, "88 Pine St")],
                    ..Supervisor::default()
                }],
                ..Company::default()
            },
        ])
    }

    fn invoice(company: &str, address: &str) -> Invoice {
        Invoice {
            id: 5,
            company_name: company.to_string(),
            property_address: address.to_string(),
            amount_cost: 1200,
            first_payment: 200,
            ..Invoice::new(NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date"))
        }
    }

    #[test]
    fn resolves_placement_within_the_named_company() {
        let links = directory().resolve(&invoice("Acme Property Group", "88 Pine St"));

        assert!(links.resolved);
        assert_eq!(links.company.id, 1);
        assert_eq!(links.supervisor.name, "Sam Ortiz");
        assert_eq!(links.property.id, 101);
    }

    #[test]
    fn unknown_company_yields_placeholders() {
        let links = directory().resolve(&invoice("Gone Holdings", "12 Oak Ave"));

        assert!(!links.resolved);
        assert_eq!(links.company, Company::placeholder("Gone Holdings"));
        assert_eq!(links.supervisor.name, "Gone Holdings");
        assert_eq!(links.property.name, "Gone Holdings");
    }

    #[test]
    fn unknown_address_keeps_company_but_not_placement() {
        let links = directory().resolve(&invoice("Harbor Rentals", "12 Oak Ave"));

        assert!(!links.resolved);
        assert_eq!(links.company.id, 2);
        assert_eq!(links.supervisor.id, 0);
        assert_eq!(links.property.name, "Harbor Rentals");
    }

    #[test]
    fn supervisor_name_follows_the_property_address() {
        let directory = directory();
        assert_eq!(
            directory.supervisor_name(&invoice("Acme Property Group", "12 Oak Ave")),
            Some("Dana Reyes")
        );
        assert_eq!(
            directory.supervisor_name(&invoice("Acme Property Group", "1 Nowhere")),
            None
        );
    }

    #[test]
    fn document_carries_number_balance_and_issuer() {
        let issuer = MyCompanyInfo {
            name: "Brightline Painting".to_string(),
            ..MyCompanyInfo::default()
        };
        let document = InvoiceDocument::assemble(
            &directory(),
            issuer,
            invoice("Acme Property Group", "12 Oak Ave"),
        );

        assert_eq!(document.invoice_number, 10005);
        assert_eq!(document.total_paid, 200);
        assert_eq!(document.balance, 1000);
        assert!(!document.settled);
        assert_eq!(document.issuer.name, "Brightline Painting");
        assert_eq!(document.supervisor.name, "Dana Reyes");
        assert!(document.company.supervisors.is_empty());
    }
}
