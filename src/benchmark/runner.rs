use super::input::BenchmarkInputProvider;
use super::reporting::{ResultSink, format_result_line, write_banner};
use super::timer::time_once;
use super::types::{BenchmarkConfig, BenchmarkResult, TrialStats};
use super::verification::OutputVerifier;
use crate::Algorithm;
use crate::error::{BenchError, Result};
use rand::rngs::StdRng;
use std::io::Write;

/// Drives the size loop and the trial loop for one algorithm at a time.
///
/// The runner owns the random generator used for input generation, the
/// record sink and the console. One runner can be reused for several
/// algorithms; the generator then carries on from where the previous
/// benchmark left it.
pub struct BenchmarkRunner<S: ResultSink, W: Write> {
    rng: StdRng,
    sink: S,
    console: W,
}

impl<S: ResultSink, W: Write> BenchmarkRunner<S, W> {
    pub fn new(rng: StdRng, sink: S, console: W) -> Self {
        Self { rng, sink, console }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn into_parts(self) -> (StdRng, S, W) {
        (self.rng, self.sink, self.console)
    }

    /// Benchmarks `algorithm` over every configured size. Each result is
    /// printed and recorded as soon as its size completes.
    pub fn run_benchmark<A, P>(
        &mut self,
        config: &BenchmarkConfig,
        algorithm: &A,
        provider: &P,
    ) -> Result<Vec<BenchmarkResult>>
    where
        P: BenchmarkInputProvider,
        P::Input: Clone,
        A: Algorithm<Input = P::Input>,
    {
        self.run_inner(config, algorithm, provider, None)
    }

    /// Like [`run_benchmark`](Self::run_benchmark), additionally checking the
    /// first trial of each size with `verifier` when `config.verify` is set.
    pub fn run_benchmark_with_verifier<A, P, V>(
        &mut self,
        config: &BenchmarkConfig,
        algorithm: &A,
        provider: &P,
        verifier: &V,
    ) -> Result<Vec<BenchmarkResult>>
    where
        P: BenchmarkInputProvider,
        P::Input: Clone,
        A: Algorithm<Input = P::Input>,
        V: OutputVerifier<Input = P::Input, Output = A::Output>,
    {
        let verifier = config
            .verify
            .then_some(verifier as &dyn OutputVerifier<Input = P::Input, Output = A::Output>);
        self.run_inner(config, algorithm, provider, verifier)
    }

    fn run_inner<A, P>(
        &mut self,
        config: &BenchmarkConfig,
        algorithm: &A,
        provider: &P,
        verifier: Option<&dyn OutputVerifier<Input = P::Input, Output = A::Output>>,
    ) -> Result<Vec<BenchmarkResult>>
    where
        P: BenchmarkInputProvider,
        P::Input: Clone,
        A: Algorithm<Input = P::Input>,
    {
        config.validate()?;
        if let Some(max) = algorithm.max_input() {
            if let Some(&too_big) = config.sizes.iter().find(|&&n| n > max) {
                return Err(BenchError::InvalidConfig(format!(
                    "{}: input size {} exceeds the maximum of {} for {}",
                    config.display_name,
                    too_big,
                    max,
                    algorithm.label()
                )));
            }
        }

        log::info!(
            "benchmarking {} ({}) over sizes {:?}, {} trial(s) each, recording to {}",
            algorithm.label(),
            provider.get_description(),
            config.sizes,
            config.repeat_count,
            self.sink.get_description()
        );
        write_banner(&mut self.console, config)?;

        let mut results = Vec::with_capacity(config.sizes.len());
        for &n in &config.sizes {
            let mut stats = TrialStats::new();

            for trial in 0..config.repeat_count {
                let mut input = provider.create_input(&mut self.rng, n);

                let check = match verifier {
                    Some(v) if trial == 0 => Some((v, input.clone())),
                    _ => None,
                };

                let (output, elapsed) = time_once(|| algorithm.run(&mut input));
                stats.record(elapsed);

                if let Some((v, original)) = check {
                    v.verify(&original, &input, &output)
                        .map_err(|reason| BenchError::Verification {
                            algorithm: algorithm.label().to_string(),
                            input_size: n,
                            reason,
                        })?;
                    log::debug!("{} n={} verified", algorithm.label(), n);
                }
            }

            let result = stats.to_benchmark_result(algorithm.label(), n);
            log::debug!(
                "{} n={}: total={} ns over {} trials",
                result.algorithm,
                n,
                result.total_ns,
                result.repeat_count
            );

            writeln!(self.console, "{}", format_result_line(&result))?;
            self.sink.record(&result)?;
            results.push(result);
        }

        self.console.flush()?;
        Ok(results)
    }
}
