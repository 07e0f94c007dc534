//! Bounded breadth-first enumeration of the Tic-Tac-Toe state space

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use super::{Player, board::BoardState, game::GameOutcome};

/// Reachable states up to a depth bound, with the moves between them.
///
/// `states` and `edges` are kept in discovery order. Consumers that need a
/// stable order should use [`GameTree::sorted_states`].
#[derive(Debug, Clone)]
pub struct GameTree {
    /// Every discovered state, each exactly once
    pub states: Vec<BoardState>,
    /// (parent, child) pairs; a child reached from several parents appears once per parent
    pub edges: Vec<(BoardState, BoardState)>,
    /// Ply depth at which each state was first discovered
    pub level_of: HashMap<BoardState, usize>,
}

/// Tally of outcomes across the states of a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub ongoing: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl GameTree {
    fn with_root(root: BoardState) -> Self {
        Self {
            states: vec![root],
            edges: Vec::new(),
            level_of: HashMap::from([(root, 0)]),
        }
    }

    /// Number of distinct states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: the empty board is present in every tree.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, state: &BoardState) -> bool {
        self.level_of.contains_key(state)
    }

    pub fn level(&self, state: &BoardState) -> Option<usize> {
        self.level_of.get(state).copied()
    }

    /// Deepest level present in the tree
    pub fn max_level(&self) -> usize {
        self.level_of.values().copied().max().unwrap_or(0)
    }

    /// Number of states on each level, indexed by level
    pub fn level_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.max_level() + 1];
        for &level in self.level_of.values() {
            counts[level] += 1;
        }
        counts
    }

    pub fn outcome_counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for state in &self.states {
            match state.outcome() {
                None => counts.ongoing += 1,
                Some(GameOutcome::Win(Player::X)) => counts.x_wins += 1,
                Some(GameOutcome::Win(Player::O)) => counts.o_wins += 1,
                Some(GameOutcome::Draw) => counts.draws += 1,
            }
        }
        counts
    }

    /// States ordered by (level, board string)
    pub fn sorted_states(&self) -> Vec<(BoardState, usize)> {
        let mut sorted: Vec<(BoardState, usize)> = self
            .states
            .iter()
            .map(|&state| (state, self.level_of.get(&state).copied().unwrap_or(0)))
            .collect();
        sorted.sort_by_cached_key(|&(state, level)| (level, state.encode()));
        sorted
    }
}

/// Enumerate states reachable from the empty board, breadth first.
///
/// A state is expanded only while its level is below `max_depth - 1`, so the
/// result holds levels `0..max_depth`. Edges into the last level are kept even
/// though those states are never expanded. A state keeps the level it was
/// first discovered at.
///
/// No clamping happens here; callers bound `max_depth` first.
pub fn build_tree(max_depth: usize) -> GameTree {
    let root = BoardState::new();
    let mut tree = GameTree::with_root(root);
    let expand_below = max_depth.saturating_sub(1);

    let mut queue = VecDeque::from([(root, 0usize)]);
    while let Some((state, level)) = queue.pop_front() {
        if level >= expand_below {
            continue;
        }

        for child in state.legal_successors() {
            tree.edges.push((state, child));
            if let Entry::Vacant(slot) = tree.level_of.entry(child) {
                slot.insert(level + 1);
                tree.states.push(child);
                queue.push_back((child, level + 1));
            }
        }
    }

    for (level, count) in tree.level_counts().iter().enumerate() {
        log::debug!("level {level}: {count} states");
    }
    log::info!(
        "built tree to depth {max_depth}: {} states, {} edges",
        tree.len(),
        tree.edges.len()
    );

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_one_is_just_the_root() {
        let tree = build_tree(1);
        assert_eq!(tree.states, vec![BoardState::new()]);
        assert!(tree.edges.is_empty());
        assert_eq!(tree.level(&BoardState::new()), Some(0));
    }

    #[test]
    fn depth_zero_behaves_like_depth_one() {
        let tree = build_tree(0);
        assert_eq!(tree.len(), 1);
        assert!(tree.edges.is_empty());
    }

    #[test]
    fn depth_two_has_one_child_per_cell() {
        let tree = build_tree(2);
        assert_eq!(tree.level_counts(), vec![1, 9]);
        assert_eq!(tree.edges.len(), 9);
        assert!(
            tree.edges
                .iter()
                .all(|(parent, _)| *parent == BoardState::new())
        );
        let first_children: Vec<String> = tree.edges.iter().map(|(_, c)| c.encode()).collect();
        assert_eq!(first_children[0], "X........");
        assert_eq!(first_children[8], "........X");
    }

    #[test]
    fn levels_stay_below_depth() {
        for depth in 1..=5 {
            let tree = build_tree(depth);
            assert!(tree.level_of.values().all(|&level| level < depth));
            assert_eq!(tree.max_level(), depth - 1);
        }
    }

    #[test]
    fn level_equals_piece_count() {
        let tree = build_tree(5);
        for (state, level) in &tree.level_of {
            assert_eq!(state.occupied_count(), *level);
        }
    }

    #[test]
    fn sorted_states_order_by_level_then_string() {
        let tree = build_tree(3);
        let sorted = tree.sorted_states();
        assert_eq!(sorted[0], (BoardState::new(), 0));
        // '.' sorts before 'O' and 'X'
        assert_eq!(sorted[1].0.encode(), "........X");
        for pair in sorted.windows(2) {
            let a = (pair[0].1, pair[0].0.encode());
            let b = (pair[1].1, pair[1].0.encode());
            assert!(a < b);
        }
    }

    #[test]
    fn shallow_trees_have_no_decided_games() {
        let counts = build_tree(5).outcome_counts();
        assert_eq!(counts.ongoing, 1090);
        assert_eq!(counts.x_wins + counts.o_wins + counts.draws, 0);
    }
}
