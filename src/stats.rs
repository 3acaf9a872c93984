use std::time::{Duration, Instant};

/// Paces the generation loop to a fixed frame budget by sleeping away
/// whatever is left of the current frame.
pub struct Pacer {
    budget: Duration,
    last: Instant,
}
impl Pacer {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            last: Instant::now(),
        }
    }

    pub fn wait(&mut self) {
        if let Some(remaining) = self.budget.checked_sub(self.last.elapsed()) {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

/// Tracks generations per second and population, reporting at most twice
/// a second. With `keep_samples` it also captures one (micros, population)
/// sample per generation for the stats CSV.
pub struct Throughput {
    gens: usize,
    population: usize,
    gens_in_report: usize,
    last_report: Instant,
    last_gen: Instant,
    samples: Vec<(u128, usize)>,
    keep_samples: bool,
}
impl Throughput {
    pub fn new(population: usize, keep_samples: bool) -> Self {
        Self {
            gens: 0,
            population,
            gens_in_report: 0,
            last_report: Instant::now(),
            last_gen: Instant::now(),
            samples: Vec::new(),
            keep_samples,
        }
    }

    pub fn record(&mut self, population: usize) {
        let delta = self.last_gen.elapsed().as_micros();
        self.last_gen = Instant::now();

        self.gens += 1;
        self.gens_in_report += 1;
        self.population = population;
        if self.keep_samples {
            self.samples.push((delta, population));
        }
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.population
        )
    }

    pub fn save_csv<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::{
            fs,
            io::{self, Write},
        };

        let file = fs::File::create(path)?;
        let mut file = io::BufWriter::new(file);

        file.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, population)) in self.samples.iter().enumerate() {
            let line = format!("{},{},{}\n", i, delta, population);
            file.write_all(line.as_bytes())?;
        }
        file.flush()
    }
}
