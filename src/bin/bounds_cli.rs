use weakseg::core::bounds::{build_bounds, BoundsContext, BoundsFn};
use weakseg::core::predictor::{PredictorRegistry, ThresholdPredictor};
use weakseg::core::run_config::RunConfig;
use weakseg::core::scheduler::build_scheduler;
use weakseg::core::toy::{self, TARGET_INTENSITY};
use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// CLI 안에서만 쓰는 옵티마이저 핸들
#[derive(Debug, Clone, Copy)]
struct OptimizerHandle {
    lr: f32,
}

fn main() {
    env_logger::init();

    let config_arg = || {
        Arg::new("config")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("실행 설정 JSON 경로")
    };

    let matches = Command::new("bounds_cli")
        .version("0.1.0")
        .about("약지도 분할 학습용 제약 구간 / 손실 가중치 스케줄 도구")
        .subcommand(
            Command::new("bounds")
                .about("토이 샘플에 대해 경계 구간 계산")
                .arg(config_arg())
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .short('n')
                        .value_name("COUNT")
                        .value_parser(value_parser!(usize))
                        .help("생성할 토이 샘플 수")
                        .default_value("16"),
                )
                .arg(
                    Arg::new("threads")
                        .long("threads")
                        .short('j')
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("병렬 스레드 수 (기본: CPU 수)"),
                ),
        )
        .subcommand(
            Command::new("schedule")
                .about("에폭별 손실 가중치 스케줄 시뮬레이션")
                .arg(config_arg())
                .arg(
                    Arg::new("epochs")
                        .long("epochs")
                        .short('e')
                        .value_name("EPOCHS")
                        .value_parser(value_parser!(usize))
                        .help("시뮬레이션할 에폭 수")
                        .default_value("10"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("bounds", sub_matches)) => handle_bounds(sub_matches),
        Some(("schedule", sub_matches)) => handle_schedule(sub_matches),
        _ => {
            println!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ 오류: {:#}", e);
        process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<RunConfig> {
    let path = matches
        .get_one::<PathBuf>("config")
        .ok_or_else(|| anyhow!("설정 경로가 필요합니다"))?;
    RunConfig::from_path(path)
}

fn handle_bounds(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let n = matches.get_one::<usize>("samples").copied().unwrap_or(16);
    let threads = matches
        .get_one::<usize>("threads")
        .copied()
        .unwrap_or_else(num_cpus::get);

    // 토이 데이터용 예측기: 목표 원 밝기 주변을 전경으로 센다
    let mut predictors = PredictorRegistry::new();
    predictors.register(
        "toy_threshold",
        ThresholdPredictor::new(vec![
            (f32::NEG_INFINITY, TARGET_INTENSITY - 60.0),
            (TARGET_INTENSITY - 60.0, TARGET_INTENSITY + 60.0),
        ])?,
    );
    let ctx = BoundsContext::with_defaults().with_predictors(predictors);
    let bounds = build_bounds(&config.bounds.name, &config.bounds.options, &ctx)?;

    println!("📐 경계 계산: {} ({}개 샘플, {} 스레드)", bounds.name(), n, threads);
    let samples = toy::generate(&config.toy, n)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("스레드 풀 생성 실패")?;

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let results = pool.install(|| {
        samples
            .par_iter()
            .map(|sample| {
                let res = bounds.compute_sample(sample);
                pb.inc(1);
                res
            })
            .collect::<Result<Vec<_>>>()
    })?;
    pb.finish_with_message("완료");

    for (sample, res) in samples.iter().zip(&results) {
        let intervals: Vec<String> = res
            .outer_iter()
            .map(|class| {
                let slots: Vec<String> = class
                    .outer_iter()
                    .map(|pair| format!("[{:.1}, {:.1}]", pair[0], pair[1]))
                    .collect();
                slots.join(" ")
            })
            .collect();
        println!("  {}: {}", sample.filename, intervals.join(" | "));
    }
    println!("✅ {}개 샘플, {:.2}ms", results.len(), start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}

fn handle_schedule(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let epochs = matches.get_one::<usize>("epochs").copied().unwrap_or(10);

    let scheduler =
        build_scheduler::<OptimizerHandle>(&config.scheduler.name, &config.scheduler.options)?;
    println!("📅 스케줄 시뮬레이션: {} ({} 에폭)", scheduler.name(), epochs);

    let mut optimizer = OptimizerHandle { lr: 5e-4 };
    let mut loss_fns = config.losses;
    let mut weights = config.weights;

    for epoch in 0..epochs {
        let (o, l, w) = scheduler.step(epoch, optimizer, loss_fns, weights)?;
        optimizer = o;
        loss_fns = l;
        weights = w;

        let losses: Vec<String> = loss_fns
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|l| l.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect();
        println!("  epoch {:>3}: weights={:?} losses=[{}]", epoch + 1, weights, losses.join("; "));
    }
    println!("✅ 최종 lr={} weights={:?}", optimizer.lr, weights);

    Ok(())
}
