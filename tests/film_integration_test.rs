use chrono::NaiveDate;
use filmorate::{Film, Filmorate, FilmorateError, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn film(i: usize) -> Film {
    Film::new(&format!("film {}", i), "desc", date(2022, 1, 12), 120)
}

fn user(i: usize) -> User {
    User::new(&format!("user{}@mail.ru", i), &format!("user{}", i), "", date(1990, 1, 1))
}

/// Ten films and ten users, liked the way the popular-films scenario needs:
/// films 3 and 7 get 9 likes, film 1 gets 7, films 4 and 9 get 4, film 2 gets 2.
fn populated() -> Filmorate {
    let app = Filmorate::new();
    for i in 1..=10 {
        app.create_film(film(i)).unwrap();
        app.create_user(user(i)).unwrap();
    }
    for u in 1..10 {
        app.add_like(7, u).unwrap();
        app.add_like(3, u).unwrap();
    }
    for u in 1..8 {
        app.add_like(1, u).unwrap();
    }
    for u in 1..5 {
        app.add_like(9, u).unwrap();
        app.add_like(4, u).unwrap();
    }
    for u in 1..3 {
        app.add_like(2, u).unwrap();
    }
    app
}

fn ids(films: &[Film]) -> Vec<i64> {
    films.iter().map(|f| f.id).collect()
}

#[test]
fn test_five_popular_films() {
    let app = populated();
    let popular = app.popular_films(Some(5)).unwrap();
    assert_eq!(ids(&popular), vec![3, 7, 1, 4, 9]);
    assert_eq!(popular[0].like_count(), 9);
}

#[test]
fn test_default_popular_count_is_ten() {
    let app = populated();
    app.create_film(film(11)).unwrap();

    let popular = app.popular_films(None).unwrap();
    assert_eq!(ids(&popular), vec![3, 7, 1, 4, 9, 2, 5, 6, 8, 10]);
}

#[test]
fn test_popular_count_larger_than_store_returns_all() {
    let app = Filmorate::new();
    for i in 1..=5 {
        app.create_film(film(i)).unwrap();
        app.create_user(user(i)).unwrap();
    }
    app.add_like(4, 1).unwrap();

    let popular = app.popular_films(Some(10)).unwrap();
    assert_eq!(ids(&popular), vec![4, 1, 2, 3, 5]);
}

#[test]
fn test_popular_rejects_non_positive_count() {
    let app = populated();
    for count in [0, -5] {
        let err = app.popular_films(Some(count)).unwrap_err();
        assert!(matches!(err, FilmorateError::InvalidArgument { .. }));
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn test_invalid_film_leaves_store_unchanged() {
    let app = Filmorate::new();
    app.create_film(film(1)).unwrap();

    let mut long = film(2);
    long.description = "In a small town where everyone knows everyone, a peculiar incident starts a chain \
of events that leads to a child's disappearance, which begins to tear at the fabric of an \
otherwise-peaceful community. "
        .to_string();
    let err = app.create_film(long).unwrap_err();
    assert_eq!(err.to_string(), "Incorrect parameter: description");
    assert_eq!(app.list_films().len(), 1);
}

#[test]
fn test_update_film_with_zero_id_adds_film() {
    let app = Filmorate::new();
    let created = app.create_film(film(1)).unwrap();

    let mut copy = app.find_film(created.id).unwrap();
    copy.id = 0;
    copy.name = "updateName".to_string();
    let added = app.update_film(copy).unwrap();

    assert_eq!(added.id, 2);
    assert_eq!(app.list_films().len(), 2);
    assert_eq!(app.find_film(1).unwrap().name, "film 1");
}

#[test]
fn test_like_visible_through_later_lookups() {
    let app = populated();
    app.add_like(10, 5).unwrap();
    assert!(app.find_film(10).unwrap().likes.contains(&5));

    app.remove_like(10, 5).unwrap();
    assert!(app.find_film(10).unwrap().likes.is_empty());
}

#[test]
fn test_like_with_unknown_ids() {
    let app = populated();
    assert_eq!(app.add_like(99, 1).unwrap_err().status_code(), 404);
    assert_eq!(app.remove_like(1, 99).unwrap_err().status_code(), 404);
    assert_eq!(app.find_film(1).unwrap().like_count(), 7);
}

#[test]
fn test_deleted_film_disappears() {
    let app = populated();
    app.delete_film(3);

    assert!(app.find_film(3).unwrap_err().is_not_found());
    assert!(app.list_films().iter().all(|f| f.id != 3));
    assert_eq!(ids(&app.popular_films(Some(1)).unwrap()), vec![7]);
}

#[test]
fn test_deleted_user_likes_are_removed() {
    let app = populated();
    app.delete_user(1);

    assert_eq!(app.find_film(3).unwrap().like_count(), 8);
    assert!(app.list_films().iter().all(|f| !f.likes.contains(&1)));
}

#[test]
fn test_reference_data() {
    let app = Filmorate::new();
    assert_eq!(app.list_genres().len(), 6);
    assert_eq!(app.find_mpa(4).unwrap().name, "R");
    assert_eq!(app.find_genre(9).unwrap_err().status_code(), 404);

    let err = app.create_film(film(1).with_genres(&[1, 7])).unwrap_err();
    assert!(matches!(err, FilmorateError::GenreNotFound(7)));
    assert!(app.list_films().is_empty());
}
