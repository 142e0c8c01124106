//! apptkit-bridge-apple - Apple EventKit bridge for apptkit
//!
//! This binary implements the apptkit bridge protocol, communicating with
//! apptkit via JSON over stdin/stdout. Calendar access itself goes through
//! short Swift scripts against EventKit, so the binary needs a Swift
//! toolchain on the host but no linking against Apple frameworks.

mod eventkit;
mod script;

use std::io::{self, BufRead, Write};

use apptkit_core::protocol::{Command, CreateEvent, ListEvents, Request, Response};

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = Response::error(&format!("Failed to parse request: {}", e));
                writeln!(stdout, "{}", response).unwrap();
                stdout.flush().unwrap();
                continue;
            }
        };

        let response = handle_request(request);

        writeln!(stdout, "{}", response).unwrap();
        stdout.flush().unwrap();
    }
}

fn handle_request(request: Request) -> String {
    match request.command {
        Command::RequestAccess => handle_request_access(),
        Command::ListCalendars => handle_list_calendars(),
        Command::ListEvents => handle_list_events(&request.params),
        Command::CreateEvent => handle_create_event(&request.params),
    }
}

fn handle_request_access() -> String {
    match eventkit::request_access() {
        Ok(status) => Response::success(status),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

fn handle_list_calendars() -> String {
    match eventkit::list_calendars() {
        Ok(calendars) => Response::success(calendars),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

fn handle_list_events(params: &serde_json::Value) -> String {
    let params: ListEvents = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match eventkit::list_events(&params.calendar_id, params.from, params.to) {
        Ok(events) => Response::success(events),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

fn handle_create_event(params: &serde_json::Value) -> String {
    let params: CreateEvent = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match eventkit::create_event(&params.calendar_id, &params.event) {
        Ok(event_id) => Response::success(event_id),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}
