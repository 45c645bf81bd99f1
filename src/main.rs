use clap::{Args, Parser, Subcommand};
use projectile_trajectory::*;

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "Flight path of a sphere under gravity and quadratic drag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single launch
    Trajectory {
        #[command(flatten)]
        projectile: ProjectileArgs,

        /// Launch angle (degrees)
        #[arg(short = 'a', long, default_value = "45.0", allow_negative_numbers = true)]
        angle: f64,

        /// Print every recorded sample as CSV (t,x,y)
        #[arg(long)]
        trace: bool,
    },
    /// Simulate a range of launch angles and compare distances
    Sweep {
        #[command(flatten)]
        projectile: ProjectileArgs,

        /// First angle (degrees)
        #[arg(long, default_value = "5.0", allow_negative_numbers = true)]
        from: f64,

        /// Last angle (degrees)
        #[arg(long, default_value = "85.0", allow_negative_numbers = true)]
        to: f64,

        /// Angle increment (degrees)
        #[arg(long, default_value = "5.0")]
        step: f64,
    },
}

#[derive(Args)]
struct ProjectileArgs {
    /// Sphere radius (m)
    #[arg(short = 'r', long, default_value = "0.05")]
    radius: f64,

    /// Sphere density (kg/m³)
    #[arg(short = 'd', long, default_value = "7850.0")]
    density: f64,

    /// Launch speed (m/s)
    #[arg(short = 'v', long, default_value = "50.0")]
    speed: f64,

    /// Integration time step (s)
    #[arg(long, default_value_t = TIME_STEP)]
    time_step: f64,

    /// Launch x position (m)
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    x0: f64,

    /// Launch height (m)
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    y0: f64,

    /// Air density (kg/m³)
    #[arg(long, default_value_t = AIR_DENSITY_SEA_LEVEL)]
    air_density: f64,

    /// Drag coefficient
    #[arg(long, default_value_t = SPHERE_DRAG_COEFFICIENT)]
    drag_coefficient: f64,

    /// Abort a run that is still airborne after this many steps
    #[arg(long, default_value_t = MAX_STEPS)]
    max_steps: u64,
}

impl ProjectileArgs {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::default()
            .with_time_step(self.time_step)
            .with_initial_position(self.x0, self.y0)
            .with_air_density(self.air_density)
            .with_drag_coefficient(self.drag_coefficient)
            .with_max_steps(self.max_steps)
    }

    fn properties(&self, angle: f64) -> PhysicalProperties {
        PhysicalProperties::new(self.radius, self.density, angle)
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn run_trajectory(
    projectile: &ProjectileArgs,
    angle: f64,
    print_trace: bool,
) -> Result<(), SimulationError> {
    let properties = projectile.properties(angle);
    let result = simulate(&properties, projectile.speed, &projectile.config())?;

    tracing::info!(
        radius = projectile.radius,
        density = projectile.density,
        angle,
        speed = projectile.speed,
        "flight simulated"
    );

    if print_trace {
        print!("{}", format_trace_csv(&result.trace));
    }
    println!("{}", FlightSummary::from_result(&result));

    Ok(())
}

fn run_sweep(
    projectile: &ProjectileArgs,
    from: f64,
    to: f64,
    step: f64,
) -> Result<(), SimulationError> {
    let results = sweep_angles(
        &projectile.properties(from),
        projectile.speed,
        from,
        to,
        step,
        &projectile.config(),
    )?;

    let entries: Vec<SweepEntry> = results
        .iter()
        .map(|(angle, result)| SweepEntry {
            angle_degrees: *angle,
            summary: FlightSummary::from_result(result),
        })
        .collect();

    tracing::info!(runs = entries.len(), "angle sweep finished");
    print!("{}", format_sweep_table(&entries));

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Trajectory {
            projectile,
            angle,
            trace,
        } => run_trajectory(projectile, *angle, *trace),
        Commands::Sweep {
            projectile,
            from,
            to,
            step,
        } => run_sweep(projectile, *from, *to, *step),
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "simulation failed");
        std::process::exit(1);
    }
}
