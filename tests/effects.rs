mod tests {
    use ledweave::effects::{
        burst_sweep, CenterSweep, Colorfade, Fill, Flash, Pattern, Pulse, Shift, Sweep,
        SweepDirection, Wait, DEFAULT_WAIT,
    };
    use ledweave::{Colors, Error, FrameAccess, RunState, Runner, Stream};

    fn polls_until_finished(runner: &mut Runner, stream: &mut Stream, limit: usize) -> usize {
        for polls in 1..=limit {
            if runner.poll(stream) == RunState::Finished {
                return polls;
            }
        }
        panic!("not finished within {limit} polls");
    }

    #[test]
    fn test_colors_require_at_least_one_entry() {
        assert_eq!(Colors::<3>::new([]).err(), Some(Error::EmptyColorList));
        let colors = Colors::new([[1, 0, 0], [0, 1, 0]]).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.first(), [1, 0, 0]);
        assert_eq!(colors.cycled(0), [1, 0, 0]);
        assert_eq!(colors.cycled(5), [0, 1, 0]);
    }

    #[test]
    fn test_fill_paints_runs_in_one_tick() {
        let mut stream = Stream::standalone(6);
        let colors = Colors::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        let mut runner = Runner::new(Fill::new(colors));

        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(
            stream.as_bytes(),
            &[1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1]
        );
    }

    #[test]
    fn test_pattern_cycles_over_five_leds() {
        let mut stream = Stream::standalone(5);
        let colors = Colors::new([[1, 1, 1], [2, 2, 2]]).unwrap();
        let mut runner = Runner::new(Pattern::new(colors));

        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.led(0), [1, 1, 1]);
        assert_eq!(stream.led(1), [2, 2, 2]);
        assert_eq!(stream.led(2), [1, 1, 1]);
        assert_eq!(stream.led(3), [2, 2, 2]);
        assert_eq!(stream.led(4), [1, 1, 1]);
    }

    #[test]
    fn test_shift_moves_pixels_toward_higher_indices() {
        let mut stream = Stream::standalone(3);
        stream.set_led(0, [1, 1, 1]);
        let mut runner = Runner::new(Shift::new(1, 1, 0).unwrap());

        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.led(0), [0, 0, 0]);
        assert_eq!(stream.led(1), [1, 1, 1]);
    }

    #[test]
    fn test_negative_shift_wraps_the_other_way() {
        let mut stream = Stream::standalone(3);
        stream.set_led(0, [1, 1, 1]);
        let mut runner = Runner::new(Shift::new(-1, 1, 0).unwrap());

        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.led(0), [0, 0, 0]);
        assert_eq!(stream.led(2), [1, 1, 1]);
    }

    #[test]
    fn test_full_circle_restores_the_picture() {
        let mut stream = Stream::standalone(6);
        let colors = Colors::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        stream.pattern(&colors);
        let start = stream.contents();

        let mut runner = Runner::new(Shift::new(1, 6, 0).unwrap());
        assert_eq!(polls_until_finished(&mut runner, &mut stream, 16), 6);
        assert_eq!(stream.contents(), start);
    }

    #[test]
    fn test_shift_sleeps_between_cycles() {
        let mut stream = Stream::standalone(4);
        stream.set_led(0, [1, 1, 1]);
        let mut runner = Runner::new(Shift::new(1, 2, 3).unwrap());

        assert_eq!(runner.poll(&mut stream), RunState::Sleeping(3));
        assert_eq!(polls_until_finished(&mut runner, &mut stream, 16), 4);
        assert_eq!(stream.led(2), [1, 1, 1]);
    }

    #[test]
    fn test_shift_rejects_zero_cycles() {
        assert_eq!(Shift::<3>::new(1, 0, 0).err(), Some(Error::ZeroCycles));
    }

    #[test]
    fn test_shift_on_empty_frame_finishes() {
        let mut stream: Stream = Stream::standalone(0);
        let mut runner = Runner::new(Shift::new(1, 5, 0).unwrap());
        assert_eq!(runner.poll(&mut stream), RunState::Finished);
    }

    #[test]
    fn test_sweep_visits_evens_up_then_odds_down() {
        let mut stream = Stream::standalone(6);
        let mut runner = Runner::new(Sweep::new(Colors::single([9, 9, 9])).with_wait(0));

        let expected_order = [0usize, 2, 4, 5, 3, 1];
        for (ticks, &lit_next) in expected_order.iter().enumerate() {
            let state = runner.poll(&mut stream);
            assert_eq!(stream.led(lit_next), [9, 9, 9], "tick {ticks}");
            let lit = (0..6).filter(|&index| stream.led(index) == [9, 9, 9]).count();
            assert_eq!(lit, ticks + 1, "tick {ticks}");
            if ticks < 5 {
                assert_eq!(state, RunState::Running);
            } else {
                assert_eq!(state, RunState::Finished);
            }
        }
    }

    #[test]
    fn test_plain_sweep_runs_in_index_order() {
        let mut stream = Stream::standalone(4);
        let mut runner = Runner::new(
            Sweep::new(Colors::single([9, 9, 9])).with_double_back(false).with_wait(0),
        );

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [9, 9, 9]);
        assert_eq!(stream.led(1), [0, 0, 0]);
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(1), [9, 9, 9]);
    }

    #[test]
    fn test_reverse_sweep_starts_at_the_high_end() {
        let mut stream = Stream::standalone(4);
        let mut runner = Runner::new(
            Sweep::new(Colors::single([9, 9, 9]))
                .with_double_back(false)
                .with_direction(SweepDirection::Reverse)
                .with_wait(0),
        );

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(3), [9, 9, 9]);
        assert_eq!(stream.led(0), [0, 0, 0]);
    }

    #[test]
    fn test_sweep_range_is_inclusive_and_clamped() {
        let mut stream = Stream::standalone(6);
        let mut runner =
            Runner::new(Sweep::new(Colors::single([9, 9, 9])).with_range(2, 9).with_wait(0));

        assert_eq!(polls_until_finished(&mut runner, &mut stream, 16), 4);
        assert_eq!(stream.led(0), [0, 0, 0]);
        assert_eq!(stream.led(1), [0, 0, 0]);
        for index in 2..6 {
            assert_eq!(stream.led(index), [9, 9, 9], "led {index}");
        }
    }

    #[test]
    fn test_sweep_paces_with_default_wait() {
        let mut stream = Stream::standalone(2);
        let mut runner = Runner::new(Sweep::new(Colors::single([9, 9, 9])));
        assert_eq!(runner.poll(&mut stream), RunState::Sleeping(DEFAULT_WAIT));
    }

    #[test]
    fn test_sweep_on_empty_frame_finishes() {
        let mut stream = Stream::standalone(0);
        let mut runner = Runner::new(Sweep::new(Colors::single([9, 9, 9])));
        assert_eq!(runner.poll(&mut stream), RunState::Finished);
    }

    #[test]
    fn test_center_sweep_grows_outward_in_rings() {
        let mut stream = Stream::standalone(6);
        let colors = Colors::new([[1, 0, 0], [0, 1, 0]]).unwrap();
        let mut runner = Runner::new(CenterSweep::new(colors).with_wait(0));

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(2), [1, 0, 0]);
        assert_eq!(stream.led(3), [1, 0, 0]);
        assert_eq!(stream.led(1), [0, 0, 0]);

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(1), [0, 1, 0]);
        assert_eq!(stream.led(4), [0, 1, 0]);

        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.led(0), [1, 0, 0]);
        assert_eq!(stream.led(5), [1, 0, 0]);
    }

    #[test]
    fn test_center_sweep_odd_frame_starts_at_the_center_led() {
        let mut stream = Stream::standalone(5);
        let mut runner = Runner::new(CenterSweep::new(Colors::single([9, 9, 9])).with_wait(0));

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(2), [9, 9, 9]);
        let lit = (0..5).filter(|&index| stream.led(index) == [9, 9, 9]).count();
        assert_eq!(lit, 1);

        assert_eq!(polls_until_finished(&mut runner, &mut stream, 8), 2);
        for index in 0..5 {
            assert_eq!(stream.led(index), [9, 9, 9], "led {index}");
        }
    }

    #[test]
    fn test_center_sweep_inward_starts_at_the_edges() {
        let mut stream = Stream::standalone(4);
        let mut runner =
            Runner::new(CenterSweep::new(Colors::single([9, 9, 9])).with_inward().with_wait(0));

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [9, 9, 9]);
        assert_eq!(stream.led(3), [9, 9, 9]);
        assert_eq!(stream.led(1), [0, 0, 0]);
    }

    #[test]
    fn test_colorfade_steps_one_unit_and_finishes_on_arrival() {
        let mut stream = Stream::standalone(2);
        let colors = Colors::new([[0, 0, 0], [3, 0, 5]]).unwrap();
        let mut runner = Runner::new(Colorfade::new(colors, 0));

        // setup tick locks in the starting color
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [0, 0, 0]);

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [1, 0, 1]);
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [2, 0, 2]);
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [3, 0, 3]);
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [3, 0, 4]);

        // finishes on the tick the final target is reached
        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.led(0), [3, 0, 5]);
        assert_eq!(stream.led(1), [3, 0, 5]);
    }

    #[test]
    fn test_colorfade_single_color_is_a_one_tick_fill() {
        let mut stream = Stream::standalone(3);
        let mut runner = Runner::new(Colorfade::new(Colors::single([5, 5, 5]), 0));

        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        for index in 0..3 {
            assert_eq!(stream.led(index), [5, 5, 5], "led {index}");
        }
    }

    #[test]
    fn test_colorfade_sleeps_between_units() {
        let mut stream = Stream::standalone(1);
        let colors = Colors::new([[0, 0, 0], [2, 0, 0]]).unwrap();
        let mut runner = Runner::new(Colorfade::new(colors, 4));
        assert_eq!(runner.poll(&mut stream), RunState::Sleeping(4));
    }

    #[test]
    fn test_pulse_dims_to_black_and_restores() {
        let mut stream = Stream::standalone(2);
        stream.fill(&Colors::single([100, 100, 100]));
        let mut runner = Runner::new(Pulse::new(1, 4, 0).unwrap());

        let expected = [75u8, 50, 25, 0, 25, 50, 75, 100];
        for (tick, &value) in expected.iter().enumerate() {
            let state = runner.poll(&mut stream);
            assert_eq!(stream.led(0), [value, value, value], "tick {tick}");
            assert_eq!(stream.led(1), [value, value, value], "tick {tick}");
            if tick < 7 {
                assert_eq!(state, RunState::Running);
            } else {
                assert_eq!(state, RunState::Finished);
            }
        }
    }

    #[test]
    fn test_pulse_cycles_do_not_accumulate_rounding() {
        let mut stream = Stream::standalone(1);
        stream.fill(&Colors::single([100, 100, 100]));
        let mut runner = Runner::new(Pulse::new(2, 4, 0).unwrap());

        assert_eq!(polls_until_finished(&mut runner, &mut stream, 32), 16);
        assert_eq!(stream.led(0), [100, 100, 100]);
    }

    #[test]
    fn test_pulse_validates_counts() {
        assert_eq!(Pulse::<3>::new(0, 4, 0).err(), Some(Error::ZeroCycles));
        assert_eq!(Pulse::<3>::new(1, 0, 0).err(), Some(Error::ZeroSteps));
    }

    #[test]
    fn test_flash_blinks_and_ends_restored() {
        let mut stream = Stream::standalone(2);
        stream.fill(&Colors::single([8, 8, 8]));
        let mut runner = Runner::new(Flash::new(2, 0).unwrap());

        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [0, 0, 0]);
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [8, 8, 8]);
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(0), [0, 0, 0]);
        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.led(0), [8, 8, 8]);
    }

    #[test]
    fn test_flash_sleeps_between_toggles() {
        let mut stream = Stream::standalone(1);
        stream.fill(&Colors::single([8, 8, 8]));
        let mut runner = Runner::new(Flash::new(1, 2).unwrap());

        assert_eq!(runner.poll(&mut stream), RunState::Sleeping(2));
        assert_eq!(polls_until_finished(&mut runner, &mut stream, 8), 3);
        assert_eq!(stream.led(0), [8, 8, 8]);
    }

    #[test]
    fn test_flash_rejects_zero_cycles() {
        assert_eq!(Flash::<3>::new(0, 0).err(), Some(Error::ZeroCycles));
    }

    #[test]
    fn test_wait_holds_for_its_tick_count() {
        let mut stream = Stream::standalone(1);
        let mut runner: Runner = Runner::new(Wait::new(3));
        assert_eq!(polls_until_finished(&mut runner, &mut stream, 8), 4);

        let mut runner: Runner = Runner::new(Wait::new(0));
        assert_eq!(polls_until_finished(&mut runner, &mut stream, 8), 1);
    }

    #[test]
    fn test_burst_head_travels_out_and_back() {
        let mut stream = Stream::standalone(3);
        let colors = Colors::single([100, 0, 0]);
        let mut runner = Runner::new(burst_sweep(&colors, 3, 1, 1, 0).unwrap());

        // bright head over a dimmed background
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        let after_head = stream.contents();
        assert_eq!(stream.led(0), [100, 0, 0]);
        assert_eq!(stream.led(1), stream.led(2));
        assert!(stream.led(1)[0] < 100);
        assert!(stream.led(1)[0] > 0);

        // one full circle out, one back, ending where it started
        assert_eq!(runner.poll(&mut stream), RunState::Running);
        assert_eq!(stream.led(1), [100, 0, 0]);
        for _ in 0..4 {
            assert_eq!(runner.poll(&mut stream), RunState::Running);
        }
        assert_eq!(runner.poll(&mut stream), RunState::Finished);
        assert_eq!(stream.contents(), after_head);
    }

    #[test]
    fn test_burst_repeats_whole_passes() {
        let mut stream = Stream::standalone(3);
        let colors = Colors::single([100, 0, 0]);
        let mut runner = Runner::new(burst_sweep(&colors, 3, 2, 1, 0).unwrap());
        assert_eq!(polls_until_finished(&mut runner, &mut stream, 32), 14);
    }

    #[test]
    fn test_burst_validates_inputs() {
        let colors = Colors::single([100, 0, 0]);
        assert_eq!(burst_sweep(&colors, 3, 0, 1, 0).err(), Some(Error::ZeroCycles));
        assert_eq!(burst_sweep(&colors, 0, 1, 1, 0).err(), Some(Error::ZeroCycles));
    }
}
