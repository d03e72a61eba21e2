//! Hardcoded seed contacts used in place of a real backend.

use crate::domain::ContactId;
use crate::models::Contact;

const SEED: [(u64, &str, &str, &str, &str); 8] = [
    (1, "Alice Johnson", "alice.j@email.com", "+1 (555) 123-4567", "Tech Corp"),
    (2, "Bob Smith", "bob.smith@email.com", "+1 (555) 234-5678", "Design Studio"),
    (3, "Charlie Brown", "charlie.b@email.com", "+1 (555) 345-6789", "Marketing Inc"),
    (4, "Diana Prince", "diana.p@email.com", "+1 (555) 456-7890", "Finance Group"),
    (5, "Edward Norton", "ed.norton@email.com", "+1 (555) 567-8901", "Consulting LLC"),
    (6, "Fiona Green", "fiona.g@email.com", "+1 (555) 678-9012", "Healthcare Plus"),
    (7, "George Wilson", "george.w@email.com", "+1 (555) 789-0123", "Retail Co"),
    (8, "Hannah Lee", "hannah.lee@email.com", "+1 (555) 890-1234", "Education Hub"),
];

/// The eight mock contacts the app starts with.
pub fn seed_contacts() -> Vec<Contact> {
    SEED.iter()
        .map(|&(id, name, email, phone, company)| Contact {
            id: ContactId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            company: Some(company.to_string()),
        })
        .collect()
}
