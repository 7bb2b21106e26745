extern crate cliffwalk;

use cliffwalk::envs::cliff_walking::*;
use cliffwalk::mdps::*;
use cliffwalk::RenderMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let env = &mut CliffWalkingEnv::new();
    let policy = RandomPolicy { n_a: env.n_a() };

    let mut obs = env.reset();
    let mut total = 0.;
    let mut steps = 0;
    loop {
        let si = env.step(policy.policy(&obs))?;
        total += si.reward;
        steps += 1;
        obs = si.observation;
        if si.terminated {
            break;
        }
    }

    println!("{}", env.render(RenderMode::Ansi).as_str().unwrap());
    println!("Episode over after {steps} steps. Return: {total}.");

    Ok(())
}
