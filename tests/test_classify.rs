use plgpt::classify::{Classification, classify, detect, reply_for, title_of, wants_3d};
use plgpt::model::GameType;

#[test]
fn detects_each_genre() {
    let cases = [
        ("Сделай шутер в космосе", GameType::Shooter),
        ("хочу стрелять по зомби", GameType::Shooter),
        ("Простая головоломка", GameType::Puzzle),
        ("a tricky PUZZLE", GameType::Puzzle),
        ("платформер про кота", GameType::Platformer),
        ("jump and run", GameType::Platformer),
        ("гонки на выживание", GameType::Racing),
        ("Racing at night", GameType::Racing),
        ("Приготовь суп", GameType::Cooking),
        ("cook some pasta", GameType::Cooking),
    ];
    for (text, want) in cases {
        assert_eq!(detect(text), Some(want), "{}", text);
    }
}

#[test]
fn earlier_genres_win_on_overlap() {
    assert_eq!(detect("шутер-головоломка"), Some(GameType::Shooter));
    assert_eq!(detect("головоломка про машины"), Some(GameType::Puzzle));
    assert_eq!(detect("прыжки на машине"), Some(GameType::Platformer));
}

#[test]
fn unknown_or_empty_falls_back_to_shooter() {
    assert_eq!(detect("привет"), None);
    assert_eq!(
        classify(""),
        Classification { game_type: GameType::Shooter, game_title: String::new() }
    );
    assert_eq!(classify("просто игра").game_type, GameType::Shooter);
}

#[test]
fn classify_fills_title_and_genre() {
    assert_eq!(
        classify("Создай шутер с астероидами"),
        Classification { game_type: GameType::Shooter, game_title: "Создай шутер с".to_string() }
    );
    let c = classify("Сделай гоночную игру на машинах");
    assert_eq!(c.game_type, GameType::Racing);
    assert_eq!(c.game_title, "Сделай гоночную игру");
}

#[test]
fn classification_logs_as_json() {
    let json: serde_json::Value = serde_json::from_str(&classify("Собери головоломку").to_json()).unwrap();
    assert_eq!(json, serde_json::json!({ "game_type": "puzzle", "game_title": "Собери головоломку" }));
}

#[test]
fn title_keeps_three_words_and_twenty_chars() {
    assert_eq!(title_of("  один   два\tтри четыре"), "один два три");
    assert_eq!(title_of("Суперсложная космическая стратегия"), "Суперсложная космиче...");
    assert_eq!(title_of("Тетрис"), "Тетрис");
}

#[test]
fn three_d_requests_are_refused() {
    assert!(wants_3d("Сделай 3D шутер"));
    assert!(wants_3d("гонки в 3 d"));
    assert!(!wants_3d("2D платформер"));
    let reply = reply_for("Сделай 3D шутер");
    assert!(reply.contains("только 2D"));
    assert!(!reply.contains("Отлично"));
}

#[test]
fn reply_names_the_genre() {
    let shooter = reply_for("Сделай шутер");
    assert!(shooter.starts_with("Отлично!"));
    assert!(shooter.contains("шутер игру \"Сделай шутер\""));
    assert!(shooter.contains("мышь"));

    let puzzle = reply_for("головоломка");
    assert!(puzzle.contains("головоломку"));
    assert!(!puzzle.contains("мышь"));

    let other = reply_for("что-нибудь весёлое");
    assert!(other.contains("новую игру"));
}
