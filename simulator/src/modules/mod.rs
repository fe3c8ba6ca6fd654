use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use log::{info, warn};

use shared_resources::config::Config;
use shared_resources::request_channel::RequestChannel;

use crate::utilities::debug::Debug;
use crate::utilities::elevator_event::ElevatorEvent;
use crate::utilities::elevator_status::ElevatorStatus;

pub mod engine;
pub mod intake;

use intake::Intake;

pub fn run() -> io::Result<()> {
    env_logger::init();

    // READ CONFIGURATION
    let config = Config::get();
    info!("starting with {:?}", config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    serve(config, stdin.lock(), &mut stdout)
}

/// Runs the simulation against the given operator streams until input ends.
pub fn serve<R: BufRead, W: Write>(config: Config, input: R, output: &mut W) -> io::Result<()> {
    let num_floors = config.elevator.num_floors;
    writeln!(output, "Elevator Simulation with {} Floors", num_floors)?;
    writeln!(output, "================================")?;

    // INITIALIZE CHANNELS
    let request_channel = Arc::new(RequestChannel::new(num_floors));
    let (elevator_event_tx, elevator_event_rx) = unbounded();

    // SEED FIRST BATCH
    let mut intake = Intake::new(input);
    let batch = intake.request_batch(&request_channel, output)?;
    if batch.is_none() {
        info!("no requests before end of input");
        return Ok(())
    }

    // INITIALIZE THREAD FOR ENGINE
    let engine_handle = {
        let elevator_settings = config.elevator.clone();
        let request_channel = Arc::clone(&request_channel);
        thread::Builder::new().name("engine".to_string()).spawn(move || engine::main(
            elevator_settings,
            request_channel,
            elevator_event_tx,
        ))?
    };

    let debug = if config.display.status_panel {
        Some(Debug::new(num_floors))
    } else {
        None
    };
    let served = serve_batches(batch, &mut intake, &request_channel, &elevator_event_rx, debug, output);

    // the engine is released even if the operator streams failed
    match &served {
        Ok(()) => info!("end of input, shutting down"),
        Err(e) => warn!("operator stream failed, shutting down: {}", e),
    }
    request_channel.close();
    let joined = engine_handle
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "engine thread panicked"));
    served.and(joined)
}

fn serve_batches<R: BufRead, W: Write>(
    mut batch: Option<Vec<u8>>,
    intake: &mut Intake<R>,
    request_channel: &RequestChannel,
    elevator_event_rx: &Receiver<ElevatorEvent>,
    mut debug: Option<Debug>,
    output: &mut W,
) -> io::Result<()> {
    let mut status = ElevatorStatus::new(request_channel.state());

    while let Some(accepted) = batch {
        status.start_batch(&accepted);

        // one batch in flight: render engine events until it reports idle
        loop {
            let event = match elevator_event_rx.recv() {
                Ok(event) => event,
                Err(_) => {
                    warn!("engine stopped while a batch was in flight");
                    return Ok(())
                },
            };
            status.update(&event);
            match debug.as_mut() {
                Some(debug) => debug.printstatus(output, &status)?,
                None => {
                    if let Some(line) = event.as_string() {
                        writeln!(output, "{}", line)?;
                    }
                },
            }
            if event == ElevatorEvent::Idle {
                break;
            }
        }
        if let Some(debug) = debug.as_mut() {
            debug.detach();
        }

        batch = intake.request_batch(request_channel, output)?;
    }
    Ok(())
}
