//! DAG scheduling of workflow jobs.
//!
//! Jobs run as soon as every dependency finished, on a small worker
//! pool; steps within a job run sequentially. The first failure stops
//! dispatch and is surfaced as the run's result.

use std::collections::HashMap;
use std::sync::Arc;

use crossbeam_channel as channel;
use parking_lot::Mutex;

use crate::actions::ActionRegistry;
use crate::config::JobConfig;
use crate::context::RunContext;
use crate::error::CliError;

struct GraphState {
    indegree: HashMap<String, usize>,
    dependents: HashMap<String, Vec<String>>,
    remaining: usize,
    failed: Option<CliError>,
}

/// Executes the workflow's job graph.
pub struct JobScheduler {
    context: Arc<RunContext>,
    actions: Arc<ActionRegistry>,
}

impl JobScheduler {
    /// Wire the scheduler to its context and action set.
    #[must_use]
    pub fn new(context: Arc<RunContext>, actions: Arc<ActionRegistry>) -> Self {
        Self { context, actions }
    }

    /// Run every job; returns the first failure.
    pub fn run(&self) -> Result<(), CliError> {
        let jobs = &self.context.config.jobs;
        if jobs.is_empty() {
            return Ok(());
        }
        self.check_cycles()?;

        let mut indegree = HashMap::new();
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();
        for (name, job) in jobs {
            indegree.insert(name.clone(), job.needs.len());
            for dependency in &job.needs {
                dependents.entry(dependency.clone()).or_default().push(name.clone());
            }
        }

        let (ready_tx, ready_rx) = channel::unbounded::<String>();
        for (name, degree) in &indegree {
            if *degree == 0 {
                // Unbounded send cannot fail while the receiver lives.
                let _ = ready_tx.send(name.clone());
            }
        }

        let state = Arc::new(Mutex::new(GraphState {
            indegree,
            dependents,
            remaining: jobs.len(),
            failed: None,
        }));

        let workers = self.context.config.concurrency.max(1).min(jobs.len());
        std::thread::scope(|scope| {
            for _ in 0..workers {
                let ready_rx = ready_rx.clone();
                let ready_tx = ready_tx.clone();
                let state = Arc::clone(&state);
                let context = Arc::clone(&self.context);
                let actions = Arc::clone(&self.actions);
                scope.spawn(move || {
                    loop {
                        let job_name = match ready_rx
                            .recv_timeout(std::time::Duration::from_millis(50))
                        {
                            Ok(name) => name,
                            Err(channel::RecvTimeoutError::Timeout) => {
                                let graph = state.lock();
                                if graph.remaining == 0 || graph.failed.is_some() {
                                    break;
                                }
                                continue;
                            }
                            Err(channel::RecvTimeoutError::Disconnected) => break,
                        };

                        let result = if context.stopped() {
                            Err(CliError::Interrupted)
                        } else {
                            run_job(&context, &actions, &job_name)
                        };

                        let mut graph = state.lock();
                        match result {
                            Ok(()) => {
                                let unlocked: Vec<String> = graph
                                    .dependents
                                    .remove(&job_name)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .filter(|dependent| {
                                        graph
                                            .indegree
                                            .get_mut(dependent)
                                            .map(|d| {
                                                *d -= 1;
                                                *d
                                            })
                                            .unwrap_or(0)
                                            == 0
                                    })
                                    .collect();
                                for dependent in unlocked {
                                    if graph.failed.is_none() {
                                        let _ = ready_tx.send(dependent);
                                    }
                                }
                            }
                            Err(e) => {
                                tracing::error!(job = %job_name, error = %e, "job failed");
                                context.request_stop();
                                if graph.failed.is_none() {
                                    graph.failed = Some(e);
                                }
                            }
                        }
                        graph.remaining -= 1;
                        if graph.remaining == 0 || graph.failed.is_some() {
                            break;
                        }
                    }
                });
            }
            drop(ready_tx);
            drop(ready_rx);
        });

        let mut graph = state.lock();
        match graph.failed.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Reject graphs with dependency cycles.
    fn check_cycles(&self) -> Result<(), CliError> {
        let jobs = &self.context.config.jobs;
        let mut indegree: HashMap<&str, usize> =
            jobs.iter().map(|(n, j)| (n.as_str(), j.needs.len())).collect();
        let mut queue: Vec<&str> =
            indegree.iter().filter(|(_, d)| **d == 0).map(|(n, _)| *n).collect();
        let mut visited = 0usize;
        while let Some(name) = queue.pop() {
            visited += 1;
            for (candidate, job) in jobs {
                if job.needs.iter().any(|n| n == name) {
                    let degree = indegree.entry(candidate.as_str()).or_insert(0);
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push(candidate.as_str());
                    }
                }
            }
        }
        if visited != jobs.len() {
            let stuck: Vec<&str> = indegree
                .iter()
                .filter(|(_, d)| **d > 0)
                .map(|(n, _)| *n)
                .collect();
            return Err(CliError::config(
                "jobs",
                format!("dependency cycle involving {stuck:?}"),
            ));
        }
        Ok(())
    }
}

fn run_job(
    context: &RunContext,
    actions: &ActionRegistry,
    job_name: &str,
) -> Result<(), CliError> {
    let job: &JobConfig = context
        .config
        .jobs
        .get(job_name)
        .ok_or_else(|| CliError::config("jobs", format!("unknown job {job_name:?}")))?;
    tracing::info!(job = %job_name, steps = job.steps.len(), "job started");
    for (index, step) in job.steps.iter().enumerate() {
        if context.stopped() {
            return Err(CliError::Interrupted);
        }
        let step_context = format!("jobs.{job_name}.steps[{index}]");
        actions.execute(context, step, &step_context)?;
    }
    tracing::info!(job = %job_name, "job finished");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::WorkflowConfig;
    use parking_lot::Mutex as PMutex;

    fn workflow(yaml: &str) -> Arc<RunContext> {
        Arc::new(RunContext::new(WorkflowConfig::from_yaml(yaml, "t.yaml").unwrap()))
    }

    fn recording_registry(log: Arc<PMutex<Vec<String>>>) -> Arc<ActionRegistry> {
        let mut actions = ActionRegistry::new();
        let ok_log = Arc::clone(&log);
        actions.register("test/ok", move |_ctx, step, _sc| {
            let tag = step.with.get("tag").and_then(|v| v.as_str()).unwrap_or("?");
            ok_log.lock().push(tag.to_owned());
            Ok(())
        });
        actions.register("test/fail", move |_ctx, _step, sc| {
            Err(CliError::config(sc, "boom"))
        });
        Arc::new(actions)
    }

    #[test]
    fn test_dependency_order() {
        let context = workflow(
            r#"
schema: { name: m, columns: [ { name: c, type: int } ] }
jobs:
  b:
    needs: [a]
    steps: [ { uses: test/ok, with: { tag: b } } ]
  a:
    steps: [ { uses: test/ok, with: { tag: a } } ]
  c:
    needs: [b]
    steps: [ { uses: test/ok, with: { tag: c } } ]
"#,
        );
        let log = Arc::new(PMutex::new(Vec::new()));
        JobScheduler::new(context, recording_registry(Arc::clone(&log))).run().unwrap();
        assert_eq!(log.lock().clone(), ["a", "b", "c"]);
    }

    #[test]
    fn test_failure_stops_dependents() {
        let context = workflow(
            r#"
schema: { name: m, columns: [ { name: c, type: int } ] }
jobs:
  a:
    steps: [ { uses: test/fail } ]
  b:
    needs: [a]
    steps: [ { uses: test/ok, with: { tag: b } } ]
"#,
        );
        let log = Arc::new(PMutex::new(Vec::new()));
        let result =
            JobScheduler::new(Arc::clone(&context), recording_registry(Arc::clone(&log))).run();
        assert!(result.is_err());
        assert!(log.lock().is_empty());
        assert!(context.stopped());
    }

    #[test]
    fn test_cycle_detected() {
        let context = workflow(
            r#"
schema: { name: m, columns: [ { name: c, type: int } ] }
jobs:
  a:
    needs: [b]
    steps: [ { uses: test/ok } ]
  b:
    needs: [a]
    steps: [ { uses: test/ok } ]
"#,
        );
        let log = Arc::new(PMutex::new(Vec::new()));
        let err = JobScheduler::new(context, recording_registry(log)).run().unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_unknown_action_fails_naming_step() {
        let context = workflow(
            r#"
schema: { name: m, columns: [ { name: c, type: int } ] }
jobs:
  a:
    steps: [ { uses: test/ghost } ]
"#,
        );
        let log = Arc::new(PMutex::new(Vec::new()));
        let err = JobScheduler::new(context, recording_registry(log)).run().unwrap_err();
        assert!(err.to_string().contains("test/ghost"));
    }

    #[test]
    fn test_independent_jobs_all_run() {
        let context = workflow(
            r#"
schema: { name: m, columns: [ { name: c, type: int } ] }
concurrency: 3
jobs:
  a: { steps: [ { uses: test/ok, with: { tag: a } } ] }
  b: { steps: [ { uses: test/ok, with: { tag: b } } ] }
  c: { steps: [ { uses: test/ok, with: { tag: c } } ] }
"#,
        );
        let log = Arc::new(PMutex::new(Vec::new()));
        JobScheduler::new(context, recording_registry(Arc::clone(&log))).run().unwrap();
        let mut tags = log.lock().clone();
        tags.sort();
        assert_eq!(tags, ["a", "b", "c"]);
    }
}
