use daedal::{
    Direction, GeneratorConfig,
    generators::{Generator, generate},
    logging::init_logging,
};

fn read_line(input: &mut String) -> std::io::Result<&str> {
    input.clear();
    std::io::stdin().read_line(input)?;
    Ok(input.trim())
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging("daedal.log");

    let mut input = String::new();
    println!("Enter maze dimensions in cells (rows cols):");

    // Parse the input dimensions
    let dims = read_line(&mut input)?
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for rows and cols.");
        return Ok(());
    }
    let mut config = GeneratorConfig {
        rows: dims[0],
        cols: dims[1],
        ..Default::default()
    };

    // Let user select the algorithm
    println!("Select maze generation algorithm:");
    for (i, generator) in Generator::ALL.iter().enumerate() {
        println!("{}. {} ({})", i + 1, generator, generator.short_name());
    }
    let choice = read_line(&mut input)?;
    config.generator = match choice.parse::<usize>() {
        Ok(n) if (1..=Generator::ALL.len()).contains(&n) => Generator::ALL[n - 1],
        _ => match choice.parse::<Generator>() {
            Ok(generator) => generator,
            Err(e) => {
                eprintln!("Invalid selection: {}", e);
                return Ok(());
            }
        },
    };

    if config.generator == Generator::BinaryTree {
        println!("Enter bias directions (vertical horizontal), empty for north west:");
        let biases = read_line(&mut input)?
            .split_whitespace()
            .map(str::parse::<Direction>)
            .collect::<Result<Vec<_>, _>>();
        match biases.as_deref() {
            Ok([]) => {}
            Ok(&[vertical, horizontal]) => {
                config.vertical_bias = vertical;
                config.horizontal_bias = horizontal;
            }
            Ok(_) => {
                eprintln!("Please enter exactly two directions.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", e);
                return Ok(());
            }
        }
    }

    println!("Enter a seed, empty for a random maze:");
    let seed = read_line(&mut input)?;
    if !seed.is_empty() {
        match seed.parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => {
                eprintln!("The seed must be a non-negative integer.");
                return Ok(());
            }
        }
    }

    let maze = match generate(&config) {
        Ok(maze) => maze,
        Err(e) => {
            tracing::warn!("[main] generation failed: {}", e);
            eprintln!("Could not generate the maze: {}", e);
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout();
    maze.render_styled(&mut stdout)?;
    println!();
    println!("{}", maze);
    Ok(())
}
