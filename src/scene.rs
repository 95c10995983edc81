//! Scene state machine.
//!
//! `transition` is the whole table; what happens on entering a scene lives in
//! `compute::enter_scene`.

use crate::entities::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// The confirm key went down this frame.
    Confirm,
    /// The player touched an active enemy target.
    EnemyHit,
    /// The quit key went down this frame.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Enter(Scene),
    /// Clear the running flag; the scene itself is left as it was.
    Terminate,
}

pub fn transition(scene: Scene, event: SceneEvent) -> Transition {
    match (scene, event) {
        (_, SceneEvent::Quit) => Transition::Terminate,
        (Scene::StartScreen | Scene::GameOver, SceneEvent::Confirm) => {
            Transition::Enter(Scene::Playing)
        }
        (Scene::Playing, SceneEvent::EnemyHit) => Transition::Enter(Scene::GameOver),
        (Scene::Playing, SceneEvent::Confirm)
        | (Scene::StartScreen | Scene::GameOver, SceneEvent::EnemyHit) => Transition::Stay,
    }
}
