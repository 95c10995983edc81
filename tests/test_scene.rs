use square_chase::entities::Scene;
use square_chase::scene::{transition, SceneEvent, Transition};

#[test]
fn confirm_starts_play_from_menus() {
    assert_eq!(transition(Scene::StartScreen, SceneEvent::Confirm), Transition::Enter(Scene::Playing));
    assert_eq!(transition(Scene::GameOver, SceneEvent::Confirm), Transition::Enter(Scene::Playing));
}

#[test]
fn confirm_during_play_is_ignored() {
    assert_eq!(transition(Scene::Playing, SceneEvent::Confirm), Transition::Stay);
}

#[test]
fn enemy_hit_only_matters_while_playing() {
    assert_eq!(transition(Scene::Playing, SceneEvent::EnemyHit), Transition::Enter(Scene::GameOver));
    assert_eq!(transition(Scene::StartScreen, SceneEvent::EnemyHit), Transition::Stay);
    assert_eq!(transition(Scene::GameOver, SceneEvent::EnemyHit), Transition::Stay);
}

#[test]
fn quit_terminates_from_anywhere() {
    for scene in [Scene::StartScreen, Scene::Playing, Scene::GameOver] {
        assert_eq!(transition(scene, SceneEvent::Quit), Transition::Terminate);
    }
}

#[test]
fn scene_discriminants_round_trip() {
    for scene in [Scene::StartScreen, Scene::Playing, Scene::GameOver] {
        assert_eq!(Scene::from_u8(scene as u8), Some(scene));
    }
    assert_eq!(Scene::from_u8(3), None);
    assert_eq!(Scene::default(), Scene::StartScreen);
}
