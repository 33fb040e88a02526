//! Hash a password for seeding accounts by hand, e.g. the first admin:
//!
//! ```text
//! cargo run -p server --features server --bin hash-password -- 's3cret-pass'
//! ```

use server::auth::password::hash_password;

fn main() {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash-password <password>");
        std::process::exit(2);
    };
    if password.chars().count() < 8 {
        eprintln!("password must be at least 8 characters");
        std::process::exit(2);
    }
    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
