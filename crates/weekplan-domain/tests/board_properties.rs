use std::cell::RefCell;
use std::collections::HashMap;
use weekplan_core::{EngineConfig, WeekplanResult};
use weekplan_domain::{Board, Command, Day, Planner, Scheduler, Task, TaskStore, Week};

#[derive(Default)]
struct MemoryStore {
    tasks: RefCell<Vec<Task>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    fn with(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            saves: RefCell::new(0),
        }
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> WeekplanResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> WeekplanResult<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

fn task(name: &str, day: usize, done: bool, pos: i64) -> Task {
    Task {
        name: name.to_string(),
        day: Day::new(day).unwrap(),
        done,
        pos,
    }
}

fn planner(tasks: Vec<Task>) -> Planner<MemoryStore> {
    let scheduler = Scheduler::new(Week::new(20).unwrap(), 2026, &EngineConfig::default()).unwrap();
    Planner::load(MemoryStore::with(tasks), scheduler)
        .unwrap()
        .with_today(Day::new(4).unwrap())
}

fn names(planner: &Planner<MemoryStore>, day: Day) -> Vec<String> {
    planner
        .board()
        .panel(day)
        .tasks()
        .iter()
        .map(|t| t.name.clone())
        .collect()
}

fn multiset(tasks: &[Task]) -> HashMap<(String, usize, bool), usize> {
    let mut counts = HashMap::new();
    for t in tasks {
        *counts
            .entry((t.name.clone(), t.day.index(), t.done))
            .or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_flatten_preserves_tasks_and_densifies_pos() {
    let input = vec![
        task("gym", 3, false, 40),
        task("read", 0, true, 7),
        task("09:00 dentist", 3, false, -2),
        task("gym", 3, false, 40),
        task("plan trip", 7, false, 0),
        task("taxes", 0, false, 3),
    ];

    let flat = Board::from_tasks(input.clone()).flatten();
    assert_eq!(multiset(&flat), multiset(&input));

    for day in Day::ALL {
        let positions: Vec<i64> = flat
            .iter()
            .filter(|t| t.day == day)
            .map(|t| t.pos)
            .collect();
        let expected: Vec<i64> = (0..positions.len() as i64).collect();
        assert_eq!(positions, expected, "pos not dense on {}", day);
    }
}

#[test]
fn test_flatten_orders_inbox_first_then_weekdays() {
    let flat = Board::from_tasks(vec![
        task("sun", 7, false, 0),
        task("mon", 1, false, 0),
        task("inbox", 0, false, 0),
    ])
    .flatten();
    let order: Vec<&str> = flat.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(order, vec!["inbox", "mon", "sun"]);
}

#[test]
fn test_add_lands_after_last_scheduled_task() {
    let mut planner = planner(vec![
        task("08:00 standup", 1, false, 0),
        task("follow up", 1, false, 1),
    ]);
    planner.select_tab(Day::MONDAY);
    planner.execute(Command::Add("buy milk".to_string())).unwrap();

    assert_eq!(
        names(&planner, Day::MONDAY),
        vec!["08:00 standup", "buy milk", "follow up"]
    );
    assert_eq!(
        planner.board().focused_panel().selected_task().unwrap().name,
        "buy milk"
    );
}

#[test]
fn test_move_respects_destination_anchor() {
    let mut planner = planner(vec![
        task("09:00 call", 2, false, 0),
        task("groceries", 0, false, 0),
    ]);
    planner.execute(Command::MoveItem(Day::new(2).unwrap())).unwrap();

    assert!(names(&planner, Day::INBOX).is_empty());
    assert_eq!(
        names(&planner, Day::new(2).unwrap()),
        vec!["09:00 call", "groceries"]
    );
    let moved = &planner.board().panel(Day::new(2).unwrap()).tasks()[1];
    assert_eq!(moved.day, Day::new(2).unwrap());
}

#[test]
fn test_move_right_and_left_at_edges() {
    let mut planner = planner(vec![task("a", 7, false, 0), task("b", 0, false, 0)]);

    planner.execute(Command::MoveLeft).unwrap();
    assert_eq!(names(&planner, Day::INBOX), vec!["b"]);

    planner.execute(Command::MoveRight).unwrap();
    assert_eq!(names(&planner, Day::MONDAY), vec!["b"]);

    planner.select_tab(Day::SUNDAY);
    planner.execute(Command::MoveRight).unwrap();
    assert_eq!(names(&planner, Day::SUNDAY), vec!["a"]);
}

#[test]
fn test_move_to_today_and_inbox() {
    let mut planner = planner(vec![task("errand", 0, false, 0)]);
    planner.execute(Command::MoveToToday).unwrap();
    assert_eq!(names(&planner, Day::new(4).unwrap()), vec!["errand"]);

    planner.execute(Command::FocusToday).unwrap();
    planner.execute(Command::MoveToInbox).unwrap();
    assert_eq!(names(&planner, Day::INBOX), vec!["errand"]);
}

#[test]
fn test_week_bounds_and_relabel() {
    let scheduler = Scheduler::new(Week::new(52).unwrap(), 2026, &EngineConfig::default()).unwrap();
    let mut planner = Planner::load(MemoryStore::default(), scheduler).unwrap();

    planner.execute(Command::NextWeek).unwrap();
    assert_eq!(planner.week().number(), 52);

    planner.execute(Command::PrevWeek).unwrap();
    assert_eq!(planner.week().number(), 51);
    assert_eq!(planner.board().panel(Day::INBOX).label(), "Inbox (Week 51)");

    let scheduler = Scheduler::new(Week::FIRST, 2026, &EngineConfig::default()).unwrap();
    let mut planner = Planner::load(MemoryStore::default(), scheduler).unwrap();
    planner.execute(Command::PrevWeek).unwrap();
    assert_eq!(planner.week(), Week::FIRST);
}

#[test]
fn test_save_writes_flattened_board_once() {
    let mut planner = planner(vec![task("b", 1, false, 9), task("a", 1, false, 2)]);
    planner.execute(Command::Add("c".to_string())).unwrap();
    assert!(planner.is_dirty());

    planner.execute(Command::Save).unwrap();
    assert!(!planner.is_dirty());
    assert_eq!(*planner.store().saves.borrow(), 1);
    assert_eq!(
        *planner.store().tasks.borrow(),
        vec![task("c", 0, false, 0), task("a", 1, false, 0), task("b", 1, false, 1)]
    );
}
