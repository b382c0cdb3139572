//! End-to-end tests for the depset command line.

use clap::Parser;
use depset_cli::cli::Cli;
use depset_cli::{CliError, run};
use std::path::Path;

fn run_args(args: &[&str]) -> depset_cli::Result<String> {
    let mut argv = vec!["depset"];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv).unwrap())
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_configure_without_sources() {
    let out = run_args(&["configure"]).unwrap();
    assert_eq!(
        out,
        "java {\n    sourceCompatibility = JavaVersion.VERSION_11\n    targetCompatibility = JavaVersion.VERSION_11\n}\n\ndependencies {\n}\n"
    );
}

#[test]
fn test_configure_build_file() {
    let dir = tempfile::tempdir().unwrap();
    let build_file = dir.path().join("build.gradle.kts");
    std::fs::write(
        &build_file,
        r#"appConfig {
    implementationItems.value(listOf("kafka"))
    testImplementationItems.value(listOf("junit"))
}
"#,
    )
    .unwrap();

    let out = run_args(&["configure", "--build-file", path_str(&build_file)]).unwrap();
    assert!(out.contains("    implementation(\"org.apache.kafka:kafka-streams:2.8.0\")\n"));
    assert!(out.contains("    testImplementation(\"org.mockito:mockito-core:3.3.3\")\n"));
    assert!(out.contains("useJUnitPlatform()"));
}

#[test]
fn test_configure_toml_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("depset.toml");
    std::fs::write(
        &config,
        "[appConfig]\nserver = \"tomcat\"\nimplementationItems = [\"spring-boot\", \"jackson\"]\n",
    )
    .unwrap();

    let out = run_args(&[
        "configure",
        "--config",
        path_str(&config),
        "--server",
        "jetty",
        "--lang",
        "kotlin",
        "--code-version",
        "17",
    ])
    .unwrap();

    assert!(out.contains("spring-boot-starter-jetty:2.5.4"));
    assert!(!out.contains("spring-boot-starter-tomcat"));
    assert!(out.contains("jackson-module-kotlin:2.12.4"));
    assert!(out.contains("kotlin-stdlib-jdk8:1.5.21"));
    assert!(out.contains("JavaVersion.VERSION_17"));
}

#[test]
fn test_configure_json() {
    let out = run_args(&[
        "configure",
        "--lang",
        "kotlin",
        "--server",
        "netty",
        "--format",
        "json",
    ])
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["selection"]["server"], "netty");
    assert_eq!(json["selection"]["lang"][0], "kotlin");
    assert_eq!(json["resolution"]["assignments"].as_array().unwrap().len(), 0);
    assert_eq!(json["report"]["codeVersion"], "11");
    assert_eq!(json["report"]["added"], 0);
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["report", "resolution", "selection"]);
}

#[test]
fn test_configure_without_java_plugin() {
    let out = run_args(&["configure", "--plugin", "base", "--format", "json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(json["report"]["codeVersion"].is_null());
}

#[test]
fn test_configure_java_library_plugin() {
    let out = run_args(&["configure", "--plugin", "java-library", "--code-version", "17"]).unwrap();
    assert!(out.starts_with("java {\n    sourceCompatibility = JavaVersion.VERSION_17\n"));
}

#[test]
fn test_configure_invalid_code_version() {
    let err = run_args(&["configure", "--code-version", "1.8"]).unwrap_err();
    assert!(matches!(err, CliError::Gradle(_)));
    assert!(err.to_string().contains("VERSION_1.8"));
}

#[test]
fn test_configure_malformed_catalog_entry() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("depset.toml");
    std::fs::write(
        &config,
        "[appConfig]\nimplementationItems = [\"internal\"]\n\n[catalog]\ninternal = [\"internal-lib\"]\n",
    )
    .unwrap();

    let err = run_args(&["configure", "--config", path_str(&config)]).unwrap_err();
    assert!(err.to_string().contains("'internal-lib'"));
}

#[test]
fn test_configure_missing_file() {
    let err = run_args(&["configure", "--config", "/nonexistent/depset.toml"]).unwrap_err();
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn test_display_set() {
    let out = run_args(&["display-set"]).unwrap();
    insta::assert_snapshot!(out, @r#"
    Available DependencySet values
    ------------------------------
    jackson
    jackson-kotlin
    junit
    testcontainers
    rx
    rx-test
    kotlin
    grpc
    spring-boot
    spring-boot-test
    kafka

    Configure current build like so:
        appConfig {
            main.set("com.plugins.Application")
            lang.value(listOf("java", "kotlin"))
            implementationItems.value(listOf("spring-boot", "jackson", "coroutines", "kotlin"))
            testImplementationItems.value(listOf("junit"))
        }
    "#);
}

#[test]
fn test_display_set_with_custom_groups() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("depset.toml");
    std::fs::write(
        &config,
        "[catalog]\nmicrometer = [\"io.micrometer:micrometer-core:1.7.3\"]\n",
    )
    .unwrap();

    let out = run_args(&["display-set", "--config", path_str(&config)]).unwrap();
    let names: Vec<_> = out.lines().skip(2).take_while(|l| !l.is_empty()).collect();
    assert_eq!(names.len(), 12);
    assert_eq!(names.last(), Some(&"micrometer"));
}
