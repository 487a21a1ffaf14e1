pub mod announcement;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod hostel;
pub mod leg;
pub mod standings;
pub mod year;

use crate::models::Status;

// Validation helpers shared by the request payloads
fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    status
        .parse::<Status>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_status"))
}

fn validate_color(color: &str) -> Result<(), validator::ValidationError> {
    let is_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if is_hex {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_color"))
    }
}
