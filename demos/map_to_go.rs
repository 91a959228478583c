fn main() {
    use quake_map_brushes::qmap::{self, EmitConfig, GoEmitter};
    use std::env::args;
    use std::io;

    env_logger::init();

    let mut arguments = args();
    arguments.next();

    let inpath = if let Some(path) = arguments.next() {
        path
    } else {
        panic!("No input path");
    };

    let type_prefix = arguments.next().unwrap_or_default();

    let infile = std::fs::File::open(inpath).unwrap();
    let brushes = match qmap::parse_brushes(io::BufReader::new(infile)) {
        Ok(brushes) => brushes,
        Err(err) => panic!("{}", err),
    };

    let emitter = GoEmitter::new(EmitConfig {
        type_prefix,
        ..EmitConfig::default()
    });

    let stdout = io::stdout();
    emitter.emit(&brushes, &mut stdout.lock()).unwrap();
}
