use dialoguer::Input;
use dialoguer::Select;
use ng_core::*;
use ng_solver::*;

/// Resolves the game to solve: a `--matrix` string wins, then `--example`,
/// otherwise an interactive menu.
pub fn resolve<const S: usize>(
    matrix: Option<&str>,
    example: bool,
    fallback: fn() -> Payoffs<S>,
    name: &str,
) -> anyhow::Result<Payoffs<S>> {
    match (matrix, example) {
        (Some(cells), _) => Payoffs::try_from(cells),
        (None, true) => Ok(fallback()),
        (None, false) => choose(fallback, name),
    }
}

/// Interactive menu: built-in example or a custom matrix.
fn choose<const S: usize>(fallback: fn() -> Payoffs<S>, name: &str) -> anyhow::Result<Payoffs<S>> {
    let options = [
        format!("Use example ({})", name),
        String::from("Enter a custom matrix"),
    ];
    match Select::new()
        .with_prompt(format!("Choose a {}x{} game", S, S))
        .items(&options)
        .default(0)
        .interact()?
    {
        0 => Ok(fallback()),
        _ => entered(),
    }
}

/// Prompts for every cell's payoff pair in row-major order.
fn entered<const S: usize>() -> anyhow::Result<Payoffs<S>> {
    let mut game = Payoffs::new();
    for row in 0..S as i32 {
        for col in 0..S as i32 {
            for player in 0..PLAYERS {
                let value: String = Input::new()
                    .with_prompt(format!(
                        "Position ({},{}) payoff to player {}",
                        row + 1,
                        col + 1,
                        player + 1
                    ))
                    .validate_with(|input: &String| -> Result<(), String> {
                        input
                            .parse::<Utility>()
                            .map(|_| ())
                            .map_err(|_| String::from("Enter a number"))
                    })
                    .interact()?;
                game.set(row, col, player, value.parse()?);
            }
        }
    }
    Ok(game)
}
