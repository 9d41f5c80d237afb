/// Verify every trait is implementable by creating mock structs.
use std::sync::Mutex;
use std::time::Duration;

use mitra_core::errors::MitraResult;
use mitra_core::models::*;
use mitra_core::traits::*;

struct MockModel;
impl ILanguageModel for MockModel {
    fn generate(&self, prompt: &str) -> MitraResult<String> {
        Ok(prompt.to_uppercase())
    }
    fn name(&self) -> &str {
        "mock"
    }
}

struct MockExecutor;
impl IQueryExecutor for MockExecutor {
    fn run(&self, _: &str) -> MitraResult<String> {
        Ok(String::new())
    }
    fn table_info(&self) -> MitraResult<String> {
        Ok("CREATE TABLE t (a INTEGER)".into())
    }
}

struct MockReader;
impl IActivityReader for MockReader {
    fn read_activity(&self, _: &str) -> MitraResult<Vec<ActivityRecord>> {
        Ok(vec![])
    }
    fn entity_ids(&self) -> MitraResult<Vec<String>> {
        Ok(vec!["m1".into()])
    }
}

#[derive(Default)]
struct RecordingSleeper(Mutex<Vec<Duration>>);
impl ISleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.0.lock().unwrap().push(duration);
    }
}

#[test]
fn traits_are_object_safe() {
    let model: Box<dyn ILanguageModel> = Box::new(MockModel);
    assert_eq!(model.generate("abc").unwrap(), "ABC");
    assert_eq!(model.name(), "mock");

    let exec: Box<dyn IQueryExecutor> = Box::new(MockExecutor);
    assert_eq!(exec.run("select 1").unwrap(), "");
    assert!(exec.table_info().unwrap().starts_with("CREATE TABLE"));

    let reader: Box<dyn IActivityReader> = Box::new(MockReader);
    assert!(reader.read_activity("m1").unwrap().is_empty());
    assert_eq!(reader.entity_ids().unwrap(), vec!["m1".to_string()]);

    let sleeper = RecordingSleeper::default();
    sleeper.sleep(Duration::from_millis(5));
    assert_eq!(sleeper.0.lock().unwrap().len(), 1);
}

#[test]
fn thread_sleeper_sleeps_zero() {
    ThreadSleeper.sleep(Duration::ZERO);
}
