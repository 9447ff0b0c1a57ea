mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = GameTestState::new(r#"
#@ .#
"#);
        let outcome = game.assert_move(Right);

        assert_eq!(outcome, MoveOutcome::Moved(GameChangeType::AgentMove));
        game.assert_matches(r#"
# @.#
"#);
    }

    #[test]
    fn when_push_pushes() {
        let mut game = GameTestState::new(r#"
#@$ .#
"#);
        let outcome = game.assert_move(Right);

        assert_eq!(outcome, MoveOutcome::Moved(GameChangeType::AgentAndBoxMove));
        game.assert_matches(r#"
# @$.#
"#);
    }

    #[test]
    fn when_walk_into_wall_nothing_changes() {
        let mut game = GameTestState::new(r#"
#@ .#
"#);
        let outcome = game.assert_no_op(Left);

        assert_eq!(outcome, MoveOutcome::NoOp(NoOpReason::Wall));
        assert_eq!(game.game.move_count(), 0);
    }

    #[test]
    fn when_walk_off_grid_nothing_changes() {
        let mut game = GameTestState::new(r#"
@.
"#);
        assert_eq!(game.assert_no_op(Left), MoveOutcome::NoOp(NoOpReason::OutOfBounds));
        assert_eq!(game.assert_no_op(Up), MoveOutcome::NoOp(NoOpReason::OutOfBounds));
        assert_eq!(game.assert_no_op(Down), MoveOutcome::NoOp(NoOpReason::OutOfBounds));
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = GameTestState::new(r#"
#@$$ .#
"#);
        let outcome = game.assert_no_op(Right);

        assert_eq!(outcome, MoveOutcome::NoOp(NoOpReason::BoxBlocked));
        game.assert_matches(r#"
#@$$ .#
"#);
    }

    #[test]
    fn when_block_pushed_into_placed_block_nothing_changes() {
        let mut game = GameTestState::new(r#"
#@$* .#
"#);
        assert_eq!(game.assert_no_op(Right), MoveOutcome::NoOp(NoOpReason::BoxBlocked));
    }

    #[test]
    fn when_block_pushed_into_wall_nothing_changes() {
        let mut game = GameTestState::new(r#"
#.@$#
"#);
        assert_eq!(game.assert_no_op(Right), MoveOutcome::NoOp(NoOpReason::BoxBlocked));
    }

    #[test]
    fn when_block_pushed_off_grid_nothing_changes() {
        let mut game = GameTestState::new(r#"
.@$
"#);
        assert_eq!(game.assert_no_op(Right), MoveOutcome::NoOp(NoOpReason::BoxBlocked));
    }

    #[test]
    fn when_block_pushed_onto_target_it_is_placed() {
        let mut game = GameTestState::new(r#"
#@$.#
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
# @*#
"#);
    }

    #[test]
    fn when_block_pushed_off_target_agent_stands_on_target() {
        let mut game = GameTestState::new(r#"
#@* .#
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
# +$.#
"#);
    }

    #[test]
    fn when_agent_leaves_target_target_remains() {
        let mut game = GameTestState::new(r#"
#+ #
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
#.@#
"#);
    }

    #[test]
    fn when_push_from_target_to_target_both_targets_remain() {
        let mut game = GameTestState::new(r#"
#+*.#
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
#.+*#
"#);
    }

    #[test]
    fn when_pushing_vertically_box_follows() {
        let mut game = GameTestState::new(r#"
###
#.#
# #
#$#
#@#
###
"#);
        game.assert_moves(&[Up, Up]);

        game.assert_matches(r#"
###
#*#
#@#
# #
# #
###
"#);
        assert_eq!(game.game.move_count(), 2);
        assert!(game.game.is_solved());
    }

    #[test]
    fn when_solved_every_direction_is_frozen() {
        let mut game = GameTestState::new(r#"
#####
#@$.#
#   #
#####
"#);
        game.assert_move(Right);
        assert!(game.game.is_solved());

        for direction in Direction::all() {
            assert_eq!(game.assert_no_op(direction), MoveOutcome::NoOp(NoOpReason::Solved));
        }
        assert_eq!(game.game.move_count(), 1);
    }

    #[test]
    fn when_agent_on_last_target_game_is_not_solved() {
        let mut game = GameTestState::new(r#"
#*@.#
"#);
        assert!(!game.game.is_solved());
        game.assert_move(Right);

        game.assert_matches(r#"
#* +#
"#);
        assert!(!game.game.is_solved());
    }

    #[test]
    fn when_every_target_is_covered_game_is_solved() {
        let game = GameTestState::new(r#"
#**@#
"#);
        assert!(game.game.is_solved());

        let game = GameTestState::new(r#"
#*.@#
"#);
        assert!(!game.game.is_solved());
    }

    #[test]
    fn when_player_moves_back_game_is_equal() {
        let mut game = GameTestState::new(r#"
#@ $.#
"#);
        game.assert_moves(&[Right, Left]);

        game.assert_matches(r#"
#@ $.#
"#);
        assert_eq!(game.game.move_count(), 2);
    }

    #[test]
    fn when_blocks_swap_layout_returns() {
        let mut game = GameTestState::new(r#"
#    #
#@$  #
# $  #
#    #
#   .#
"#);
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
#   .#
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(r#"
#    #
#@$  #
# $  #
#    #
#   .#
"#);
        assert_eq!(game.game.move_count(), 20);
    }

    #[test]
    fn when_restarted_custom_level_returns_to_its_start() {
        let mut game = GameTestState::new(r#"
#@$ .#
"#);
        game.assert_moves(&[Right, Right]);
        game.game.reset();

        game.assert_matches(r#"
#@$ .#
"#);
        assert_eq!(game.game.move_count(), 0);
    }
}
