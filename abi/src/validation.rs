use chrono::{Local, NaiveDate};

use crate::errors::Error;
use crate::model::{Film, User};

const MAX_DESCRIPTION_LEN: usize = 200;

// date of the first public film screening; nothing can predate it
fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap()
}

/// Field checks applied before a film reaches the store. Fails on the
/// first violated rule.
pub fn validate_film(film: &Film) -> Result<(), Error> {
    if film.name.trim().is_empty() {
        return Err(Error::validation("film name must not be blank"));
    }
    if film.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(Error::validation(
            "film description must not exceed 200 characters",
        ));
    }
    if film.release_date < earliest_release_date() {
        return Err(Error::validation(
            "film release date must not be earlier than 1895-12-28",
        ));
    }
    if film.duration <= 0 {
        return Err(Error::validation(
            "film duration must be a positive number of minutes",
        ));
    }
    Ok(())
}

/// Field checks applied before a user reaches the store.
pub fn validate_user(user: &User) -> Result<(), Error> {
    if user.email.trim().is_empty() {
        return Err(Error::validation("user email must not be blank"));
    }
    if !user.email.contains('@') {
        return Err(Error::validation("user email must contain the @ sign"));
    }
    if user.login.trim().is_empty() {
        return Err(Error::validation("user login must not be blank"));
    }
    if user.login.contains(char::is_whitespace) {
        return Err(Error::validation("user login must not contain whitespace"));
    }
    if user.birthday > Local::now().date_naive() {
        return Err(Error::validation("user birthday must not be in the future"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Days;

    use super::*;
    use crate::errors::ErrorKind;
    use crate::model::{Genre, MpaRating};

    fn film() -> Film {
        Film {
            id: 0,
            name: "Arrival".to_string(),
            description: "Aliens arrive".to_string(),
            release_date: NaiveDate::from_ymd_opt(2016, 11, 10).unwrap(),
            duration: 116,
            likes: HashSet::new(),
            genres: vec![Genre {
                id: 2,
                name: String::new(),
            }],
            mpa: MpaRating {
                id: 3,
                name: String::new(),
            },
        }
    }

    fn user() -> User {
        User {
            id: 0,
            email: "a@b.com".to_string(),
            login: "amy".to_string(),
            name: String::new(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            friends: vec![],
        }
    }

    #[test]
    fn accepts_valid_film() {
        assert!(validate_film(&film()).is_ok());
    }

    #[test]
    fn rejects_blank_film_name() {
        let mut f = film();
        f.name = "   ".to_string();
        let err = validate_film(&f).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn rejects_long_description_only_past_limit() {
        let mut f = film();
        f.description = "x".repeat(200);
        assert!(validate_film(&f).is_ok());
        f.description = "x".repeat(201);
        assert!(validate_film(&f).is_err());
    }

    #[test]
    fn description_limit_counts_characters_not_bytes() {
        let mut f = film();
        // 200 cyrillic characters, 400 bytes
        f.description = "ж".repeat(200);
        assert!(validate_film(&f).is_ok());
    }

    #[test]
    fn rejects_release_before_first_screening() {
        let mut f = film();
        f.release_date = NaiveDate::from_ymd_opt(1895, 12, 27).unwrap();
        assert!(validate_film(&f).is_err());
        f.release_date = NaiveDate::from_ymd_opt(1895, 12, 28).unwrap();
        assert!(validate_film(&f).is_ok());
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut f = film();
        f.duration = 0;
        assert!(validate_film(&f).is_err());
        f.duration = -5;
        assert!(validate_film(&f).is_err());
    }

    #[test]
    fn accepts_valid_user() {
        assert!(validate_user(&user()).is_ok());
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut u = user();
        u.email = "nobody.example.com".to_string();
        let err = validate_user(&u).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn rejects_blank_email() {
        let mut u = user();
        u.email = String::new();
        assert!(validate_user(&u).is_err());
    }

    #[test]
    fn rejects_login_with_whitespace() {
        let mut u = user();
        u.login = "amy adams".to_string();
        assert!(validate_user(&u).is_err());
    }

    #[test]
    fn rejects_future_birthday() {
        let mut u = user();
        u.birthday = Local::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap();
        assert!(validate_user(&u).is_err());
        // today is still fine
        u.birthday = Local::now().date_naive();
        assert!(validate_user(&u).is_ok());
    }
}
