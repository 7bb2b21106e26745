extern crate cliffwalk;
extern crate float_eq;

use assertor::*;
use cliffwalk::envs::cliff_walking::*;
use cliffwalk::envs::errors::EnvError;
use cliffwalk::mdps::Mdp;
use cliffwalk::*;
use float_eq::*;

#[test]
fn safe_perimeter_episode_e2e() {
    let env = &mut CliffWalkingEnv::new();
    assert_that!(env.transitions().len()).is_equal_to(48 * 4);

    let obs = env.reset();
    assert_eq!(obs, [3.0, 0.0]);

    // Up and over the cliff row, then back down onto the goal.
    let mut actions = vec![UP];
    actions.extend([RIGHT; 11]);
    actions.push(DOWN);

    let mut total = 0.;
    let mut last = None;
    for a in actions {
        let si = env.step(a).unwrap();
        total += si.reward;
        last = Some(si);
    }

    let last = last.unwrap();
    assert_eq!(last.observation, [3.0, 11.0]);
    assert!(last.terminated);
    assert_float_eq!(last.reward, -1.0, abs <= 0.0);
    assert_float_eq!(total, -13.0, abs <= 0.0);
}

#[test]
fn cliff_fall_episode_e2e() {
    let env = &mut CliffWalkingEnv::new();
    env.reset();

    let si = env.step(RIGHT).unwrap();
    assert_eq!(si.observation, [3.0, 1.0]);
    assert!(si.terminated);
    assert_float_eq!(si.reward, -100.0, abs <= 0.0);
    assert_float_eq!(si.info["prob"].as_f64().unwrap(), 1.0, abs <= 0.0);

    // The fall ends the episode; only reset brings the env back.
    assert_eq!(env.step(LEFT).unwrap_err(), EnvError::InvalidState);
    assert_eq!(env.reset(), [3.0, 0.0]);
}

#[test]
fn ansi_render_after_reset() {
    let env = &mut CliffWalkingEnv::new();
    env.reset();

    let rf = env.render(RenderMode::Ansi);
    assert_eq!(
        rf.as_str().unwrap(),
        "o  o  o  o  o  o  o  o  o  o  o  o\n\
         o  o  o  o  o  o  o  o  o  o  o  o\n\
         o  o  o  o  o  o  o  o  o  o  o  o\n\
         x  C  C  C  C  C  C  C  C  C  C  T\n\n"
    );
}

#[test]
fn ansi_render_tracks_the_cursor() {
    let env = &mut CliffWalkingEnv::new();
    env.reset();
    env.step(UP).unwrap();
    env.step(RIGHT).unwrap();

    let rf = env.render(RenderMode::Ansi);
    assert_eq!(
        rf.as_str().unwrap(),
        "o  o  o  o  o  o  o  o  o  o  o  o\n\
         o  o  o  o  o  o  o  o  o  o  o  o\n\
         o  x  o  o  o  o  o  o  o  o  o  o\n\
         o  C  C  C  C  C  C  C  C  C  C  T\n\n"
    );
}

#[test]
fn cliff_fall_transition_snapshot() {
    let env = CliffWalkingEnv::new();
    let ts = env.transitions();
    let start = env.grid().to_linear((3, 0));

    insta::assert_yaml_snapshot!(ts[&(start, RIGHT)][0], @r###"
    ---
    next_state: 37
    probability: 1.0
    reward: -100.0
    done: true
    "###);
}
