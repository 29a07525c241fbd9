// Scripted engine shared by the integration tests

#![allow(dead_code)]

use isi_playground::engine::{CompileResult, Engine, EngineError, EngineGateway, InterpreterResult};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A request the engine received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Compile { source: String },
    Run { source: String, stdin: String },
}

/// Engine that answers from queues of canned results
#[derive(Default)]
pub struct ScriptedEngine {
    compile_results: RefCell<VecDeque<CompileResult>>,
    run_results: RefCell<VecDeque<InterpreterResult>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_compile(self, result: CompileResult) -> Self {
        self.compile_results.borrow_mut().push_back(result);
        self
    }

    pub fn on_run(self, result: InterpreterResult) -> Self {
        self.run_results.borrow_mut().push_back(result);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Engine for ScriptedEngine {
    fn initialize(&self) -> Result<(), EngineError> {
        Ok(())
    }

    fn compile_to_target(&self, source: &str) -> Result<CompileResult, EngineError> {
        self.requests.borrow_mut().push(Request::Compile {
            source: source.to_string(),
        });
        Ok(self
            .compile_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_default())
    }

    fn run_interpreter(
        &self,
        source: &str,
        stdin: &str,
    ) -> Result<InterpreterResult, EngineError> {
        self.requests.borrow_mut().push(Request::Run {
            source: source.to_string(),
            stdin: stdin.to_string(),
        });
        Ok(self.run_results.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Gateway around `engine`, already initialized
pub fn ready_gateway(engine: ScriptedEngine) -> EngineGateway<ScriptedEngine> {
    let gateway = EngineGateway::new(engine);
    gateway.initialize().expect("scripted engine always initializes");
    gateway
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
