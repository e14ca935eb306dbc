use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;

use shopforge_core::NewCustomer;
use shopforge_store::MemoryStore;

use crate::errors::GenerationError;
use crate::factories::ensure_positive;

/// Generate `n` customers with unique emails. Uniqueness is guaranteed by
/// construction: every email embeds the customer's sequence number, picked
/// up from the current population so repeated runs keep appending.
pub fn generate_customers(
    store: &mut MemoryStore,
    n: u64,
    rng: &mut impl Rng,
) -> Result<u64, GenerationError> {
    ensure_positive("customers", n)?;

    let start_seq = store.customer_count();
    let mut rows = Vec::with_capacity(n as usize);
    for offset in 0..n {
        let seq = start_seq + offset + 1;
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);
        let email = format!(
            "{}.{}.{}@example.com",
            email_slug(&first_name),
            email_slug(&last_name),
            seq
        );
        rows.push(NewCustomer {
            email,
            // Opaque placeholder; real credentials are never generated.
            password_hash: format!("$seed${seq:08x}"),
            first_name,
            last_name,
        });
    }

    let ids = store.insert_customers(rows)?;
    Ok(ids.len() as u64)
}

/// Lowercased alphanumeric form of a name part for the local part of an
/// email (drops apostrophes, hyphens, spaces).
fn email_slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::email_slug;

    #[test]
    fn slug_drops_punctuation_and_lowercases() {
        assert_eq!(email_slug("O'Brien"), "obrien");
        assert_eq!(email_slug("Anne-Marie"), "annemarie");
    }
}
