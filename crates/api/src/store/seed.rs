//! Starting data loaded when the service boots.

use secrecy::SecretString;

use record_shop_core::{Email, EmailError, Price, RecordId, Role, UserId};

use crate::models::{Record, RecordFields, User};

/// The three staff accounts, one per role.
///
/// # Errors
///
/// Returns [`EmailError`] if a seed email is malformed.
pub fn users() -> Result<Vec<User>, EmailError> {
    [
        (1, "Chris Clerk", "clerk@recordshop.com", Role::Clerk),
        (2, "Mandy Manager", "manager@recordshop.com", Role::Manager),
        (3, "Alex Admin", "admin@recordshop.com", Role::Admin),
    ]
    .into_iter()
    .map(|(id, name, email, role)| {
        Ok(User {
            id: UserId::new(id),
            name: name.to_string(),
            email: Email::parse(email)?,
            role,
            password: SecretString::from("password"),
        })
    })
    .collect()
}

/// The six records on the shelf at opening, IDs 1 to 6.
#[must_use]
pub fn records() -> Vec<Record> {
    [
        ("Californication", "Red Hot Chili Peppers", "Vinyl", "Rock", 1999, 2999, 8),
        ("Black Summer", "Red Hot Chili Peppers", "CD", "Rock", 2022, 1499, 12),
        ("Audioslave", "Audioslave", "Vinyl", "Rock", 2002, 2799, 6),
        ("Stony Hill", "Damian Marley", "CD", "Reggae", 2017, 1299, 9),
        ("The Bends", "Radiohead", "Vinyl", "Alternative", 1995, 2699, 5),
        ("OK Computer", "Radiohead", "Vinyl", "Alternative", 1997, 2899, 4),
    ]
    .into_iter()
    .zip(1..)
    .map(
        |((title, artist, format, genre, release_year, cents, stock_qty), id)| {
            Record::new(
                RecordId::new(id),
                RecordFields {
                    title: title.to_string(),
                    artist: artist.to_string(),
                    format: format.to_string(),
                    genre: genre.to_string(),
                    release_year,
                    price: Price::from_cents(cents),
                    stock_qty,
                    customer_id: String::new(),
                    customer_first_name: String::new(),
                    customer_last_name: String::new(),
                    customer_contact: String::new(),
                    customer_email: String::new(),
                },
            )
        },
    )
    .collect()
}
