mod home;
pub use home::Home;

mod about;
pub use about::About;

mod login;
pub use login::Login;

mod join_waitlist;
pub use join_waitlist::JoinWaitlist;

mod profile;
pub use profile::Profile;

mod upload;
pub use upload::Upload;

mod dashboard;
pub use dashboard::Dashboard;

mod artists;
pub use artists::Artists;

mod artwork_detail;
pub use artwork_detail::ArtworkDetail;

/// Price tag for a listing. Whole dollars drop the cents.
pub(crate) fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${}", price as i64)
    } else {
        format!("${:.2}", price)
    }
}

/// An upload form must have a file picked before any remote call is made.
/// Returns the error message shown inline when no file is selected.
pub(crate) fn require_selected_file(
    file: &Option<(String, Vec<u8>)>,
) -> Result<(), &'static str> {
    match file {
        Some((_, bytes)) if !bytes.is_empty() => Ok(()),
        _ => Err("Select an image first"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_rejected_before_any_remote_call() {
        assert!(require_selected_file(&None).is_err());
        assert!(require_selected_file(&Some(("empty.png".to_string(), Vec::new()))).is_err());
    }

    #[test]
    fn selected_file_passes() {
        let file = Some(("work.png".to_string(), vec![1, 2, 3]));
        assert!(require_selected_file(&file).is_ok());
    }

    #[test]
    fn whole_dollar_prices_have_no_cents() {
        assert_eq!(format_price(120.0), "$120");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn fractional_prices_keep_two_decimals() {
        assert_eq!(format_price(99.5), "$99.50");
        assert_eq!(format_price(49.99), "$49.99");
    }
}
