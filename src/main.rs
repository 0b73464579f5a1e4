mod engine;
mod utils;

use engine::cli::{CLI, CliCommand};
use engine::ecs::World;
use engine::ecs::component::StageBuffer;
use engine::graphics::FsModelSource;
use engine::parts::{PartCatalog, TraitRegistry};
use engine::vehicle::{VehicleAssembler, VehicleSpec};

const DATA_ROOT: &str = "data";

fn main() {
    utils::logger::init();

    let cli = CLI::parse();
    let result = match cli.command {
        CliCommand::Assemble { filename } => assemble(&filename),
        CliCommand::Describe { filename } => describe(&filename),
        CliCommand::Usage => {
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("tin-rocket: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  tin-rocket assemble <craft.json>");
    println!("  tin-rocket describe <craft.json>");
}

fn assemble(filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = PartCatalog::load_dir(format!("{DATA_ROOT}/parts"))?;
    let registry = TraitRegistry::with_builtin_traits();
    let models = FsModelSource::new(DATA_ROOT);
    let spec = VehicleSpec::from_file(filename)?;

    let mut world = World::new();
    let assembler = VehicleAssembler::new(&catalog, &registry, &models);
    let handle = pollster::block_on(assembler.assemble(&mut world, &spec))?;

    println!("assembled '{filename}': {} entities", world.len());
    for (i, part) in world.children_of(handle.0).to_vec().iter().enumerate() {
        println!("  part {i}: [{}]", world.component_names(*part).join(", "));
    }
    if let Some(stages) = world.get_component::<StageBuffer>(handle.0) {
        for (i, stage) in stages.stages.iter().enumerate() {
            println!("  stage {i}: {} part(s)", stage.parts.len());
        }
    }
    Ok(())
}

fn describe(filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = PartCatalog::load_dir(format!("{DATA_ROOT}/parts"))?;
    let spec = VehicleSpec::from_file(filename)?;

    println!(
        "craft '{filename}': {} part(s), {} staging group(s)",
        spec.parts.len(),
        spec.staging_groups.len()
    );
    for (i, instance) in spec.parts.iter().enumerate() {
        let name = catalog
            .get_part(instance.part)
            .map(|d| d.name.as_str())
            .unwrap_or("<unknown part>");
        println!("  [{i}] {name} at {:?}", instance.local_position);
    }
    for (i, group) in spec.staging_groups.iter().enumerate() {
        println!("  stage {i}: parts {:?}", group.parts);
    }
    Ok(())
}
