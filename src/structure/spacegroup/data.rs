// Generated tables; do not edit by hand.

use super::asym::Span;

/// Every setting, indexed by Hall number minus one, as
/// `(hall number, space group number, hall symbol, hermann-mauguin symbol)`.
pub(crate) static SETTINGS: [(u16, u16, &str, &str); 530] = [
    (1, 1, "P 1", "P 1"),
    (2, 2, "-P 1", "P -1"),
    (3, 3, "P 2y", "P 2"),
    (4, 3, "P 2", "P 1 1 2"),
    (5, 3, "P 2x", "P 2 1 1"),
    (6, 4, "P 2yb", "P 21"),
    (7, 4, "P 2c", "P 1 1 21"),
    (8, 4, "P 2xa", "P 21 1 1"),
    (9, 5, "C 2y", "C 2"),
    (10, 5, "A 2y", "A 1 2 1"),
    (11, 5, "I 2y", "I 1 2 1"),
    (12, 5, "A 2", "A 1 1 2"),
    (13, 5, "B 2", "B 1 1 2"),
    (14, 5, "I 2", "I 1 1 2"),
    (15, 5, "B 2x", "B 2 1 1"),
    (16, 5, "C 2x", "C 2 1 1"),
    (17, 5, "I 2x", "I 2 1 1"),
    (18, 6, "P -2y", "P m"),
    (19, 6, "P -2", "P 1 1 m"),
    (20, 6, "P -2x", "P m 1 1"),
    (21, 7, "P -2yc", "P c"),
    (22, 7, "P -2yac", "P 1 n 1"),
    (23, 7, "P -2ya", "P 1 a 1"),
    (24, 7, "P -2a", "P 1 1 a"),
    (25, 7, "P -2ab", "P 1 1 n"),
    (26, 7, "P -2b", "P 1 1 b"),
    (27, 7, "P -2xb", "P b 1 1"),
    (28, 7, "P -2xbc", "P n 1 1"),
    (29, 7, "P -2xc", "P c 1 1"),
    (30, 8, "C -2y", "C m"),
    (31, 8, "A -2y", "A 1 m 1"),
    (32, 8, "I -2y", "I 1 m 1"),
    (33, 8, "A -2", "A 1 1 m"),
    (34, 8, "B -2", "B 1 1 m"),
    (35, 8, "I -2", "I 1 1 m"),
    (36, 8, "B -2x", "B m 1 1"),
    (37, 8, "C -2x", "C m 1 1"),
    (38, 8, "I -2x", "I m 1 1"),
    (39, 9, "C -2yc", "C c"),
    (40, 9, "A -2yab", "A 1 n 1"),
    (41, 9, "I -2ya", "I 1 a 1"),
    (42, 9, "A -2ya", "A 1 a 1"),
    (43, 9, "C -2ybc", "C 1 n 1"),
    (44, 9, "I -2yc", "I 1 c 1"),
    (45, 9, "A -2a", "A 1 1 a"),
    (46, 9, "B -2ab", "B 1 1 n"),
    (47, 9, "I -2b", "I 1 1 b"),
    (48, 9, "B -2b", "B 1 1 b"),
    (49, 9, "A -2ac", "A 1 1 n"),
    (50, 9, "I -2a", "I 1 1 a"),
    (51, 9, "B -2xb", "B b 1 1"),
    (52, 9, "C -2xac", "C n 1 1"),
    (53, 9, "I -2xc", "I c 1 1"),
    (54, 9, "C -2xc", "C c 1 1"),
    (55, 9, "B -2xbc", "B n 1 1"),
    (56, 9, "I -2xb", "I b 1 1"),
    (57, 10, "-P 2y", "P 2/m"),
    (58, 10, "-P 2", "P 1 1 2/m"),
    (59, 10, "-P 2x", "P 2/m 1 1"),
    (60, 11, "-P 2yb", "P 21/m"),
    (61, 11, "-P 2c", "P 1 1 21/m"),
    (62, 11, "-P 2xa", "P 21/m 1 1"),
    (63, 12, "-C 2y", "C 2/m"),
    (64, 12, "-A 2y", "A 1 2/m 1"),
    (65, 12, "-I 2y", "I 1 2/m 1"),
    (66, 12, "-A 2", "A 1 1 2/m"),
    (67, 12, "-B 2", "B 1 1 2/m"),
    (68, 12, "-I 2", "I 1 1 2/m"),
    (69, 12, "-B 2x", "B 2/m 1 1"),
    (70, 12, "-C 2x", "C 2/m 1 1"),
    (71, 12, "-I 2x", "I 2/m 1 1"),
    (72, 13, "-P 2yc", "P 2/c"),
    (73, 13, "-P 2yac", "P 1 2/n 1"),
    (74, 13, "-P 2ya", "P 1 2/a 1"),
    (75, 13, "-P 2a", "P 1 1 2/a"),
    (76, 13, "-P 2ab", "P 1 1 2/n"),
    (77, 13, "-P 2b", "P 1 1 2/b"),
    (78, 13, "-P 2xb", "P 2/b 1 1"),
    (79, 13, "-P 2xbc", "P 2/n 1 1"),
    (80, 13, "-P 2xc", "P 2/c 1 1"),
    (81, 14, "-P 2ybc", "P 21/c"),
    (82, 14, "-P 2yn", "P 1 21/n 1"),
    (83, 14, "-P 2yab", "P 1 21/a 1"),
    (84, 14, "-P 2ac", "P 1 1 21/a"),
    (85, 14, "-P 2n", "P 1 1 21/n"),
    (86, 14, "-P 2bc", "P 1 1 21/b"),
    (87, 14, "-P 2xab", "P 21/b 1 1"),
    (88, 14, "-P 2xn", "P 21/n 1 1"),
    (89, 14, "-P 2xac", "P 21/c 1 1"),
    (90, 15, "-C 2yc", "C 2/c"),
    (91, 15, "-A 2yab", "A 1 2/n 1"),
    (92, 15, "-I 2ya", "I 1 2/a 1"),
    (93, 15, "-A 2ya", "A 1 2/a 1"),
    (94, 15, "-C 2ybc", "C 1 2/n 1"),
    (95, 15, "-I 2yc", "I 1 2/c 1"),
    (96, 15, "-A 2a", "A 1 1 2/a"),
    (97, 15, "-B 2bc", "B 1 1 2/n"),
    (98, 15, "-I 2b", "I 1 1 2/b"),
    (99, 15, "-B 2b", "B 1 1 2/b"),
    (100, 15, "-A 2ac", "A 1 1 2/n"),
    (101, 15, "-I 2a", "I 1 1 2/a"),
    (102, 15, "-B 2xb", "B 2/b 1 1"),
    (103, 15, "-C 2xbc", "C 2/n 1 1"),
    (104, 15, "-I 2xc", "I 2/c 1 1"),
    (105, 15, "-C 2xc", "C 2/c 1 1"),
    (106, 15, "-B 2xbc", "B 2/n 1 1"),
    (107, 15, "-I 2xb", "I 2/b 1 1"),
    (108, 16, "P 2 2", "P 2 2 2"),
    (109, 17, "P 2c 2", "P 2 2 21"),
    (110, 17, "P 2a 2a", "P 21 2 2"),
    (111, 17, "P 2 2b", "P 2 21 2"),
    (112, 18, "P 2 2ab", "P 21 21 2"),
    (113, 18, "P 2bc 2", "P 2 21 21"),
    (114, 18, "P 2ac 2ac", "P 21 2 21"),
    (115, 19, "P 2ac 2ab", "P 21 21 21"),
    (116, 20, "C 2c 2", "C 2 2 21"),
    (117, 20, "A 2a 2a", "A 21 2 2"),
    (118, 20, "B 2 2b", "B 2 21 2"),
    (119, 21, "C 2 2", "C 2 2 2"),
    (120, 21, "A 2 2", "A 2 2 2"),
    (121, 21, "B 2 2", "B 2 2 2"),
    (122, 22, "F 2 2", "F 2 2 2"),
    (123, 23, "I 2 2", "I 2 2 2"),
    (124, 24, "I 2b 2c", "I 21 21 21"),
    (125, 25, "P 2 -2", "P m m 2"),
    (126, 25, "P -2 2", "P 2 m m"),
    (127, 25, "P -2 -2", "P m 2 m"),
    (128, 26, "P 2c -2", "P m c 21"),
    (129, 26, "P 2c -2c", "P c m 21"),
    (130, 26, "P -2a 2a", "P 21 m a"),
    (131, 26, "P -2 2a", "P 21 a m"),
    (132, 26, "P -2 -2b", "P b 21 m"),
    (133, 26, "P -2b -2", "P m 21 b"),
    (134, 27, "P 2 -2c", "P c c 2"),
    (135, 27, "P -2a 2", "P 2 a a"),
    (136, 27, "P -2b -2b", "P b 2 b"),
    (137, 28, "P 2 -2a", "P m a 2"),
    (138, 28, "P 2 -2b", "P b m 2"),
    (139, 28, "P -2b 2", "P 2 m b"),
    (140, 28, "P -2c 2", "P 2 c m"),
    (141, 28, "P -2c -2c", "P c 2 m"),
    (142, 28, "P -2a -2a", "P m 2 a"),
    (143, 29, "P 2c -2ac", "P c a 21"),
    (144, 29, "P 2c -2b", "P b c 21"),
    (145, 29, "P -2b 2a", "P 21 a b"),
    (146, 29, "P -2ac 2a", "P 21 c a"),
    (147, 29, "P -2bc -2c", "P c 21 b"),
    (148, 29, "P -2a -2ab", "P b 21 a"),
    (149, 30, "P 2 -2bc", "P n c 2"),
    (150, 30, "P 2 -2ac", "P c n 2"),
    (151, 30, "P -2ac 2", "P 2 n a"),
    (152, 30, "P -2ab 2", "P 2 a n"),
    (153, 30, "P -2ab -2ab", "P b 2 n"),
    (154, 30, "P -2bc -2bc", "P n 2 b"),
    (155, 31, "P 2ac -2", "P m n 21"),
    (156, 31, "P 2bc -2bc", "P n m 21"),
    (157, 31, "P -2ab 2ab", "P 21 m n"),
    (158, 31, "P -2 2ac", "P 21 n m"),
    (159, 31, "P -2 -2bc", "P n 21 m"),
    (160, 31, "P -2ab -2", "P m 21 n"),
    (161, 32, "P 2 -2ab", "P b a 2"),
    (162, 32, "P -2bc 2", "P 2 c b"),
    (163, 32, "P -2ac -2ac", "P c 2 a"),
    (164, 33, "P 2c -2n", "P n a 21"),
    (165, 33, "P 2c -2ab", "P b n 21"),
    (166, 33, "P -2bc 2a", "P 21 n b"),
    (167, 33, "P -2n 2a", "P 21 c n"),
    (168, 33, "P -2n -2ac", "P c 21 n"),
    (169, 33, "P -2ac -2n", "P n 21 a"),
    (170, 34, "P 2 -2n", "P n n 2"),
    (171, 34, "P -2n 2", "P 2 n n"),
    (172, 34, "P -2n -2n", "P n 2 n"),
    (173, 35, "C 2 -2", "C m m 2"),
    (174, 35, "A -2 2", "A 2 m m"),
    (175, 35, "B -2 -2", "B m 2 m"),
    (176, 36, "C 2c -2", "C m c 21"),
    (177, 36, "C 2c -2c", "C c m 21"),
    (178, 36, "A -2a 2a", "A 21 m a"),
    (179, 36, "A -2 2a", "A 21 a m"),
    (180, 36, "B -2 -2b", "B b 21 m"),
    (181, 36, "B -2b -2", "B m 21 b"),
    (182, 37, "C 2 -2c", "C c c 2"),
    (183, 37, "A -2a 2", "A 2 a a"),
    (184, 37, "B -2b -2b", "B b 2 b"),
    (185, 38, "A 2 -2", "A m m 2"),
    (186, 38, "B 2 -2", "B m m 2"),
    (187, 38, "B -2 2", "B 2 m m"),
    (188, 38, "C -2 2", "C 2 m m"),
    (189, 38, "C -2 -2", "C m 2 m"),
    (190, 38, "A -2 -2", "A m 2 m"),
    (191, 39, "A 2 -2c", "A e m 2"),
    (192, 39, "B 2 -2c", "B m a 2"),
    (193, 39, "B -2c 2", "B 2 c m"),
    (194, 39, "C -2b 2", "C 2 m b"),
    (195, 39, "C -2b -2b", "C m 2 a"),
    (196, 39, "A -2c -2c", "A c 2 m"),
    (197, 40, "A 2 -2a", "A m a 2"),
    (198, 40, "B 2 -2b", "B b m 2"),
    (199, 40, "B -2b 2", "B 2 m b"),
    (200, 40, "C -2c 2", "C 2 c m"),
    (201, 40, "C -2c -2c", "C c 2 m"),
    (202, 40, "A -2a -2a", "A m 2 a"),
    (203, 41, "A 2 -2ac", "A e a 2"),
    (204, 41, "B 2 -2bc", "B b a 2"),
    (205, 41, "B -2bc 2", "B 2 c b"),
    (206, 41, "C -2bc 2", "C 2 c b"),
    (207, 41, "C -2bc -2bc", "C c 2 a"),
    (208, 41, "A -2ac -2ac", "A c 2 a"),
    (209, 42, "F 2 -2", "F m m 2"),
    (210, 42, "F -2 2", "F 2 m m"),
    (211, 42, "F -2 -2", "F m 2 m"),
    (212, 43, "F 2 -2d", "F d d 2"),
    (213, 43, "F -2d 2", "F 2 d d"),
    (214, 43, "F -2d -2d", "F d 2 d"),
    (215, 44, "I 2 -2", "I m m 2"),
    (216, 44, "I -2 2", "I 2 m m"),
    (217, 44, "I -2 -2", "I m 2 m"),
    (218, 45, "I 2 -2c", "I b a 2"),
    (219, 45, "I -2a 2", "I 2 c b"),
    (220, 45, "I -2b -2b", "I c 2 a"),
    (221, 46, "I 2 -2a", "I m a 2"),
    (222, 46, "I 2 -2b", "I b m 2"),
    (223, 46, "I -2b 2", "I 2 m b"),
    (224, 46, "I -2c 2", "I 2 c m"),
    (225, 46, "I -2c -2c", "I c 2 m"),
    (226, 46, "I -2a -2a", "I m 2 a"),
    (227, 47, "-P 2 2", "P m m m"),
    (228, 48, "P 2 2 -1n", "P n n n"),
    (229, 48, "-P 2ab 2bc", "P n n n"),
    (230, 49, "-P 2 2c", "P c c m"),
    (231, 49, "-P 2a 2", "P m a a"),
    (232, 49, "-P 2b 2b", "P b m b"),
    (233, 50, "P 2 2 -1ab", "P b a n"),
    (234, 50, "-P 2ab 2b", "P b a n"),
    (235, 50, "P 2 2 -1bc", "P n c b"),
    (236, 50, "-P 2b 2bc", "P n c b"),
    (237, 50, "P 2 2 -1ac", "P c n a"),
    (238, 50, "-P 2a 2c", "P c n a"),
    (239, 51, "-P 2a 2a", "P m m a"),
    (240, 51, "-P 2b 2", "P m m b"),
    (241, 51, "-P 2 2b", "P b m m"),
    (242, 51, "-P 2c 2c", "P c m m"),
    (243, 51, "-P 2c 2", "P m c m"),
    (244, 51, "-P 2 2a", "P m a m"),
    (245, 52, "-P 2a 2bc", "P n n a"),
    (246, 52, "-P 2b 2n", "P n n b"),
    (247, 52, "-P 2n 2b", "P b n n"),
    (248, 52, "-P 2ab 2c", "P c n n"),
    (249, 52, "-P 2ab 2n", "P n c n"),
    (250, 52, "-P 2n 2bc", "P n a n"),
    (251, 53, "-P 2ac 2", "P m n a"),
    (252, 53, "-P 2bc 2bc", "P n m b"),
    (253, 53, "-P 2ab 2ab", "P b m n"),
    (254, 53, "-P 2 2ac", "P c n m"),
    (255, 53, "-P 2 2bc", "P n c m"),
    (256, 53, "-P 2ab 2", "P m a n"),
    (257, 54, "-P 2a 2ac", "P c c a"),
    (258, 54, "-P 2b 2c", "P c c b"),
    (259, 54, "-P 2a 2b", "P b a a"),
    (260, 54, "-P 2ac 2c", "P c a a"),
    (261, 54, "-P 2bc 2b", "P b c b"),
    (262, 54, "-P 2b 2ab", "P b a b"),
    (263, 55, "-P 2 2ab", "P b a m"),
    (264, 55, "-P 2bc 2", "P m c b"),
    (265, 55, "-P 2ac 2ac", "P c m a"),
    (266, 56, "-P 2ab 2ac", "P c c n"),
    (267, 56, "-P 2ac 2bc", "P n a a"),
    (268, 56, "-P 2bc 2ab", "P b n b"),
    (269, 57, "-P 2c 2b", "P b c m"),
    (270, 57, "-P 2c 2ac", "P c a m"),
    (271, 57, "-P 2ac 2a", "P m c a"),
    (272, 57, "-P 2b 2a", "P m a b"),
    (273, 57, "-P 2a 2ab", "P b m a"),
    (274, 57, "-P 2bc 2c", "P c m b"),
    (275, 58, "-P 2 2n", "P n n m"),
    (276, 58, "-P 2n 2", "P m n n"),
    (277, 58, "-P 2n 2n", "P n m n"),
    (278, 59, "P 2 2ab -1ab", "P m m n"),
    (279, 59, "-P 2ab 2a", "P m m n"),
    (280, 59, "P 2bc 2 -1bc", "P n m m"),
    (281, 59, "-P 2c 2bc", "P n m m"),
    (282, 59, "P 2ac 2ac -1ac", "P m n m"),
    (283, 59, "-P 2c 2a", "P m n m"),
    (284, 60, "-P 2n 2ab", "P b c n"),
    (285, 60, "-P 2n 2c", "P c a n"),
    (286, 60, "-P 2a 2n", "P n c a"),
    (287, 60, "-P 2bc 2n", "P n a b"),
    (288, 60, "-P 2ac 2b", "P b n a"),
    (289, 60, "-P 2b 2ac", "P c n b"),
    (290, 61, "-P 2ac 2ab", "P b c a"),
    (291, 61, "-P 2bc 2ac", "P c a b"),
    (292, 62, "-P 2ac 2n", "P n m a"),
    (293, 62, "-P 2bc 2a", "P m n b"),
    (294, 62, "-P 2c 2ab", "P b n m"),
    (295, 62, "-P 2n 2ac", "P c m n"),
    (296, 62, "-P 2n 2a", "P m c n"),
    (297, 62, "-P 2c 2n", "P n a m"),
    (298, 63, "-C 2c 2", "C m c m"),
    (299, 63, "-C 2c 2c", "C c m m"),
    (300, 63, "-A 2a 2a", "A m m a"),
    (301, 63, "-A 2 2a", "A m a m"),
    (302, 63, "-B 2 2b", "B b m m"),
    (303, 63, "-B 2b 2", "B m m b"),
    (304, 64, "-C 2ac 2", "C m c e"),
    (305, 64, "-C 2bc 2bc", "C c m b"),
    (306, 64, "-A 2ac 2ac", "A b m a"),
    (307, 64, "-A 2 2ac", "A c a m"),
    (308, 64, "-B 2 2bc", "B b c m"),
    (309, 64, "-B 2bc 2", "B m a b"),
    (310, 65, "-C 2 2", "C m m m"),
    (311, 65, "-A 2 2", "A m m m"),
    (312, 65, "-B 2 2", "B m m m"),
    (313, 66, "-C 2 2c", "C c c m"),
    (314, 66, "-A 2a 2", "A m a a"),
    (315, 66, "-B 2b 2b", "B b m b"),
    (316, 67, "-C 2a 2", "C m m e"),
    (317, 67, "-C 2b 2b", "C m m b"),
    (318, 67, "-A 2c 2c", "A b m m"),
    (319, 67, "-A 2 2c", "A c m m"),
    (320, 67, "-B 2 2c", "B m c m"),
    (321, 67, "-B 2c 2", "B m a m"),
    (322, 68, "C 2 2 -1bc", "C c c a"),
    (323, 68, "-C 2a 2ac", "C c c e"),
    (324, 68, "C 2 2 -1bc", "C c c b"),
    (325, 68, "-C 2b 2c", "C c c b"),
    (326, 68, "A 2 2 -1ac", "A b a a"),
    (327, 68, "-A 2a 2c", "A b a a"),
    (328, 68, "A 2 2 -1ac", "A c a a"),
    (329, 68, "-A 2ac 2c", "A c a a"),
    (330, 68, "B 2 2 -1bc", "B b c b"),
    (331, 68, "-B 2bc 2b", "B b c b"),
    (332, 68, "B 2 2 -1bc", "B b a b"),
    (333, 68, "-B 2b 2bc", "B b a b"),
    (334, 69, "-F 2 2", "F m m m"),
    (335, 70, "F 2 2 -1d", "F d d d"),
    (336, 70, "-F 2uv 2vw", "F d d d"),
    (337, 71, "-I 2 2", "I m m m"),
    (338, 72, "-I 2 2c", "I b a m"),
    (339, 72, "-I 2a 2", "I m c b"),
    (340, 72, "-I 2b 2b", "I c m a"),
    (341, 73, "-I 2b 2c", "I b c a"),
    (342, 73, "-I 2a 2b", "I c a b"),
    (343, 74, "-I 2b 2", "I m m a"),
    (344, 74, "-I 2a 2a", "I m m b"),
    (345, 74, "-I 2c 2c", "I b m m"),
    (346, 74, "-I 2 2b", "I c m m"),
    (347, 74, "-I 2 2a", "I m c m"),
    (348, 74, "-I 2c 2", "I m a m"),
    (349, 75, "P 4", "P 4"),
    (350, 76, "P 4w", "P 41"),
    (351, 77, "P 4c", "P 42"),
    (352, 78, "P 4cw", "P 43"),
    (353, 79, "I 4", "I 4"),
    (354, 80, "I 4bw", "I 41"),
    (355, 81, "P -4", "P -4"),
    (356, 82, "I -4", "I -4"),
    (357, 83, "-P 4", "P 4/m"),
    (358, 84, "-P 4c", "P 42/m"),
    (359, 85, "P 4ab -1ab", "P 4/n"),
    (360, 85, "-P 4a", "P 4/n"),
    (361, 86, "P 4n -1n", "P 42/n"),
    (362, 86, "-P 4bc", "P 42/n"),
    (363, 87, "-I 4", "I 4/m"),
    (364, 88, "I 4bw -1bw", "I 41/a"),
    (365, 88, "-I 4ad", "I 41/a"),
    (366, 89, "P 4 2", "P 4 2 2"),
    (367, 90, "P 4ab 2ab", "P 4 21 2"),
    (368, 91, "P 4w 2c", "P 41 2 2"),
    (369, 92, "P 4abw 2nw", "P 41 21 2"),
    (370, 93, "P 4c 2", "P 42 2 2"),
    (371, 94, "P 4n 2n", "P 42 21 2"),
    (372, 95, "P 4cw 2c", "P 43 2 2"),
    (373, 96, "P 4nw 2abw", "P 43 21 2"),
    (374, 97, "I 4 2", "I 4 2 2"),
    (375, 98, "I 4bw 2bw", "I 41 2 2"),
    (376, 99, "P 4 -2", "P 4 m m"),
    (377, 100, "P 4 -2ab", "P 4 b m"),
    (378, 101, "P 4c -2c", "P 42 c m"),
    (379, 102, "P 4n -2n", "P 42 n m"),
    (380, 103, "P 4 -2c", "P 4 c c"),
    (381, 104, "P 4 -2n", "P 4 n c"),
    (382, 105, "P 4c -2", "P 42 m c"),
    (383, 106, "P 4c -2ab", "P 42 b c"),
    (384, 107, "I 4 -2", "I 4 m m"),
    (385, 108, "I 4 -2c", "I 4 c m"),
    (386, 109, "I 4bw -2", "I 41 m d"),
    (387, 110, "I 4bw -2c", "I 41 c d"),
    (388, 111, "P -4 2", "P -4 2 m"),
    (389, 112, "P -4 2c", "P -4 2 c"),
    (390, 113, "P -4 2ab", "P -4 21 m"),
    (391, 114, "P -4 2n", "P -4 21 c"),
    (392, 115, "P -4 -2", "P -4 m 2"),
    (393, 116, "P -4 -2c", "P -4 c 2"),
    (394, 117, "P -4 -2ab", "P -4 b 2"),
    (395, 118, "P -4 -2n", "P -4 n 2"),
    (396, 119, "I -4 -2", "I -4 m 2"),
    (397, 120, "I -4 -2c", "I -4 c 2"),
    (398, 121, "I -4 2", "I -4 2 m"),
    (399, 122, "I -4 2bw", "I -4 2 d"),
    (400, 123, "-P 4 2", "P 4/m m m"),
    (401, 124, "-P 4 2c", "P 4/m c c"),
    (402, 125, "P 4 2 -1ab", "P 4/n b m"),
    (403, 125, "-P 4a 2b", "P 4/n b m"),
    (404, 126, "P 4 2 -1n", "P 4/n n c"),
    (405, 126, "-P 4a 2bc", "P 4/n n c"),
    (406, 127, "-P 4 2ab", "P 4/m b m"),
    (407, 128, "-P 4 2n", "P 4/m n c"),
    (408, 129, "P 4ab 2ab -1ab", "P 4/n m m"),
    (409, 129, "-P 4a 2a", "P 4/n m m"),
    (410, 130, "P 4ab 2n -1ab", "P 4/n c c"),
    (411, 130, "-P 4a 2ac", "P 4/n c c"),
    (412, 131, "-P 4c 2", "P 42/m m c"),
    (413, 132, "-P 4c 2c", "P 42/m c m"),
    (414, 133, "P 4n 2c -1n", "P 42/n b c"),
    (415, 133, "-P 4ac 2b", "P 42/n b c"),
    (416, 134, "P 4n 2 -1n", "P 42/n n m"),
    (417, 134, "-P 4ac 2bc", "P 42/n n m"),
    (418, 135, "-P 4c 2ab", "P 42/m b c"),
    (419, 136, "-P 4n 2n", "P 42/m n m"),
    (420, 137, "P 4n 2n -1n", "P 42/n m c"),
    (421, 137, "-P 4ac 2a", "P 42/n m c"),
    (422, 138, "P 4n 2ab -1n", "P 42/n c m"),
    (423, 138, "-P 4ac 2ac", "P 42/n c m"),
    (424, 139, "-I 4 2", "I 4/m m m"),
    (425, 140, "-I 4 2c", "I 4/m c m"),
    (426, 141, "I 4bw 2bw -1bw", "I 41/a m d"),
    (427, 141, "-I 4bd 2", "I 41/a m d"),
    (428, 142, "I 4bw 2aw -1bw", "I 41/a c d"),
    (429, 142, "-I 4bd 2c", "I 41/a c d"),
    (430, 143, "P 3", "P 3"),
    (431, 144, "P 31", "P 31"),
    (432, 145, "P 32", "P 32"),
    (433, 146, "R 3", "R 3"),
    (434, 146, "P 3*", "R 3"),
    (435, 147, "-P 3", "P -3"),
    (436, 148, "-R 3", "R -3"),
    (437, 148, "-P 3*", "R -3"),
    (438, 149, "P 3 2", "P 3 1 2"),
    (439, 150, "P 3 2\"", "P 3 2 1"),
    (440, 151, "P 31 2c (0 0 1)", "P 31 1 2"),
    (441, 152, "P 31 2\"", "P 31 2 1"),
    (442, 153, "P 32 2c (0 0 -1)", "P 32 1 2"),
    (443, 154, "P 32 2\"", "P 32 2 1"),
    (444, 155, "R 3 2\"", "R 3 2"),
    (445, 155, "P 3* 2", "R 3 2"),
    (446, 156, "P 3 -2\"", "P 3 m 1"),
    (447, 157, "P 3 -2", "P 3 1 m"),
    (448, 158, "P 3 -2\"c", "P 3 c 1"),
    (449, 159, "P 3 -2c", "P 3 1 c"),
    (450, 160, "R 3 -2\"", "R 3 m"),
    (451, 160, "P 3* -2", "R 3 m"),
    (452, 161, "R 3 -2\"c", "R 3 c"),
    (453, 161, "P 3* -2n", "R 3 c"),
    (454, 162, "-P 3 2", "P -3 1 m"),
    (455, 163, "-P 3 2c", "P -3 1 c"),
    (456, 164, "-P 3 2\"", "P -3 m 1"),
    (457, 165, "-P 3 2\"c", "P -3 c 1"),
    (458, 166, "-R 3 2\"", "R -3 m"),
    (459, 166, "-P 3* 2", "R -3 m"),
    (460, 167, "-R 3 2\"c", "R -3 c"),
    (461, 167, "-P 3* 2n", "R -3 c"),
    (462, 168, "P 6", "P 6"),
    (463, 169, "P 61", "P 61"),
    (464, 170, "P 65", "P 65"),
    (465, 171, "P 62", "P 62"),
    (466, 172, "P 64", "P 64"),
    (467, 173, "P 6c", "P 63"),
    (468, 174, "P -6", "P -6"),
    (469, 175, "-P 6", "P 6/m"),
    (470, 176, "-P 6c", "P 63/m"),
    (471, 177, "P 6 2", "P 6 2 2"),
    (472, 178, "P 61 2 (0 0 -1)", "P 61 2 2"),
    (473, 179, "P 65 2 (0 0 1)", "P 65 2 2"),
    (474, 180, "P 62 2c (0 0 1)", "P 62 2 2"),
    (475, 181, "P 64 2c (0 0 -1)", "P 64 2 2"),
    (476, 182, "P 6c 2c", "P 63 2 2"),
    (477, 183, "P 6 -2", "P 6 m m"),
    (478, 184, "P 6 -2c", "P 6 c c"),
    (479, 185, "P 6c -2", "P 63 c m"),
    (480, 186, "P 6c -2c", "P 63 m c"),
    (481, 187, "P -6 2", "P -6 m 2"),
    (482, 188, "P -6c 2", "P -6 c 2"),
    (483, 189, "P -6 -2", "P -6 2 m"),
    (484, 190, "P -6c -2c", "P -6 2 c"),
    (485, 191, "-P 6 2", "P 6/m m m"),
    (486, 192, "-P 6 2c", "P 6/m c c"),
    (487, 193, "-P 6c 2", "P 63/m c m"),
    (488, 194, "-P 6c 2c", "P 63/m m c"),
    (489, 195, "P 2 2 3", "P 2 3"),
    (490, 196, "F 2 2 3", "F 2 3"),
    (491, 197, "I 2 2 3", "I 2 3"),
    (492, 198, "P 2ac 2ab 3", "P 21 3"),
    (493, 199, "I 2b 2c 3", "I 21 3"),
    (494, 200, "-P 2 2 3", "P m -3"),
    (495, 201, "P 2 2 3 -1n", "P n -3"),
    (496, 201, "-P 2ab 2bc 3", "P n -3"),
    (497, 202, "-F 2 2 3", "F m -3"),
    (498, 203, "F 2 2 3 -1d", "F d -3"),
    (499, 203, "-F 2uv 2vw 3", "F d -3"),
    (500, 204, "-I 2 2 3", "I m -3"),
    (501, 205, "-P 2ac 2ab 3", "P a -3"),
    (502, 206, "-I 2b 2c 3", "I a -3"),
    (503, 207, "P 4 2 3", "P 4 3 2"),
    (504, 208, "P 4n 2 3", "P 42 3 2"),
    (505, 209, "F 4 2 3", "F 4 3 2"),
    (506, 210, "F 4d 2 3", "F 41 3 2"),
    (507, 211, "I 4 2 3", "I 4 3 2"),
    (508, 212, "P 4acd 2ab 3", "P 43 3 2"),
    (509, 213, "P 4bd 2ab 3", "P 41 3 2"),
    (510, 214, "I 4bd 2c 3", "I 41 3 2"),
    (511, 215, "P -4 2 3", "P -4 3 m"),
    (512, 216, "F -4 2 3", "F -4 3 m"),
    (513, 217, "I -4 2 3", "I -4 3 m"),
    (514, 218, "P -4n 2 3", "P -4 3 n"),
    (515, 219, "F -4a 2 3", "F -4 3 c"),
    (516, 220, "I -4bd 2c 3", "I -4 3 d"),
    (517, 221, "-P 4 2 3", "P m -3 m"),
    (518, 222, "P 4 2 3 -1n", "P n -3 n"),
    (519, 222, "-P 4a 2bc 3", "P n -3 n"),
    (520, 223, "-P 4n 2 3", "P m -3 n"),
    (521, 224, "P 4n 2 3 -1n", "P n -3 m"),
    (522, 224, "-P 4bc 2bc 3", "P n -3 m"),
    (523, 225, "-F 4 2 3", "F m -3 m"),
    (524, 226, "-F 4a 2 3", "F m -3 c"),
    (525, 227, "F 4d 2 3 -1d", "F d -3 m"),
    (526, 227, "-F 4vw 2vw 3", "F d -3 m"),
    (527, 228, "F 4d 2 3 -1ad", "F d -3 c"),
    (528, 228, "-F 4cvw 2vw 3", "F d -3 c"),
    (529, 229, "-I 4 2 3", "I m -3 m"),
    (530, 230, "-I 4bd 2c 3", "I a -3 d"),
];

/// Hall numbers of each space group, indexed by space group number.
/// The first entry of each list is the default setting.
pub(crate) static HALL_NUMBERS: [&[u16]; 231] = [
    &[0],
    &[1],
    &[2],
    &[3, 4, 5],
    &[6, 7, 8],
    &[9, 10, 11, 12, 13, 14, 15, 16, 17],
    &[18, 19, 20],
    &[21, 22, 23, 24, 25, 26, 27, 28, 29],
    &[30, 31, 32, 33, 34, 35, 36, 37, 38],
    &[39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56],
    &[57, 58, 59],
    &[60, 61, 62],
    &[63, 64, 65, 66, 67, 68, 69, 70, 71],
    &[72, 73, 74, 75, 76, 77, 78, 79, 80],
    &[81, 82, 83, 84, 85, 86, 87, 88, 89],
    &[90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107],
    &[108],
    &[109, 110, 111],
    &[112, 113, 114],
    &[115],
    &[116, 117, 118],
    &[119, 120, 121],
    &[122],
    &[123],
    &[124],
    &[125, 126, 127],
    &[128, 129, 130, 131, 132, 133],
    &[134, 135, 136],
    &[137, 138, 139, 140, 141, 142],
    &[143, 144, 145, 146, 147, 148],
    &[149, 150, 151, 152, 153, 154],
    &[155, 156, 157, 158, 159, 160],
    &[161, 162, 163],
    &[164, 165, 166, 167, 168, 169],
    &[170, 171, 172],
    &[173, 174, 175],
    &[176, 177, 178, 179, 180, 181],
    &[182, 183, 184],
    &[185, 186, 187, 188, 189, 190],
    &[191, 192, 193, 194, 195, 196],
    &[197, 198, 199, 200, 201, 202],
    &[203, 204, 205, 206, 207, 208],
    &[209, 210, 211],
    &[212, 213, 214],
    &[215, 216, 217],
    &[218, 219, 220],
    &[221, 222, 223, 224, 225, 226],
    &[227],
    &[229, 228],
    &[230, 231, 232],
    &[234, 233, 236, 235, 238, 237],
    &[239, 240, 241, 242, 243, 244],
    &[245, 246, 247, 248, 249, 250],
    &[251, 252, 253, 254, 255, 256],
    &[257, 258, 259, 260, 261, 262],
    &[263, 264, 265],
    &[266, 267, 268],
    &[269, 270, 271, 272, 273, 274],
    &[275, 276, 277],
    &[279, 278, 281, 280, 283, 282],
    &[284, 285, 286, 287, 288, 289],
    &[290, 291],
    &[292, 293, 294, 295, 296, 297],
    &[298, 299, 300, 301, 302, 303],
    &[304, 305, 306, 307, 308, 309],
    &[310, 311, 312],
    &[313, 314, 315],
    &[316, 317, 318, 319, 320, 321],
    &[323, 322, 325, 324, 327, 326, 329, 328, 331, 330, 333, 332],
    &[334],
    &[336, 335],
    &[337],
    &[338, 339, 340],
    &[341, 342],
    &[343, 344, 345, 346, 347, 348],
    &[349],
    &[350],
    &[351],
    &[352],
    &[353],
    &[354],
    &[355],
    &[356],
    &[357],
    &[358],
    &[360, 359],
    &[362, 361],
    &[363],
    &[365, 364],
    &[366],
    &[367],
    &[368],
    &[369],
    &[370],
    &[371],
    &[372],
    &[373],
    &[374],
    &[375],
    &[376],
    &[377],
    &[378],
    &[379],
    &[380],
    &[381],
    &[382],
    &[383],
    &[384],
    &[385],
    &[386],
    &[387],
    &[388],
    &[389],
    &[390],
    &[391],
    &[392],
    &[393],
    &[394],
    &[395],
    &[396],
    &[397],
    &[398],
    &[399],
    &[400],
    &[401],
    &[403, 402],
    &[405, 404],
    &[406],
    &[407],
    &[409, 408],
    &[411, 410],
    &[412],
    &[413],
    &[415, 414],
    &[417, 416],
    &[418],
    &[419],
    &[421, 420],
    &[423, 422],
    &[424],
    &[425],
    &[427, 426],
    &[429, 428],
    &[430],
    &[431],
    &[432],
    &[433, 434],
    &[435],
    &[436, 437],
    &[438],
    &[439],
    &[440],
    &[441],
    &[442],
    &[443],
    &[444, 445],
    &[446],
    &[447],
    &[448],
    &[449],
    &[450, 451],
    &[452, 453],
    &[454],
    &[455],
    &[456],
    &[457],
    &[458, 459],
    &[460, 461],
    &[462],
    &[463],
    &[464],
    &[465],
    &[466],
    &[467],
    &[468],
    &[469],
    &[470],
    &[471],
    &[472],
    &[473],
    &[474],
    &[475],
    &[476],
    &[477],
    &[478],
    &[479],
    &[480],
    &[481],
    &[482],
    &[483],
    &[484],
    &[485],
    &[486],
    &[487],
    &[488],
    &[489],
    &[490],
    &[491],
    &[492],
    &[493],
    &[494],
    &[496, 495],
    &[497],
    &[499, 498],
    &[500],
    &[501],
    &[502],
    &[503],
    &[504],
    &[505],
    &[506],
    &[507],
    &[508],
    &[509],
    &[510],
    &[511],
    &[512],
    &[513],
    &[514],
    &[515],
    &[516],
    &[517],
    &[519, 518],
    &[520],
    &[522, 521],
    &[523],
    &[524],
    &[526, 525],
    &[527, 528],
    &[529],
    &[530],
];

/// Asymmetric unit bricks as `(hall numbers, [x spans, y spans, z spans])`.
pub(crate) static BRICKS: &[(&[u16], [&[Span]; 3])] = &[
    (&[1, 434, 451], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[2, 4, 5, 7, 8, 18, 21, 22, 23], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[3, 20, 29], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[6, 25, 26, 27, 28], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[9, 10, 11, 37, 38, 53, 54, 133, 136, 147, 153, 154, 160, 172], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[12, 14, 16, 17, 30, 31, 32, 39, 40, 41, 42, 43, 44, 60, 76, 77, 78, 79, 81, 82, 83, 85, 86, 87, 88, 111, 112, 113, 115, 138, 139, 144, 145, 149, 152, 156, 157, 161, 162, 164, 165, 166, 167, 170, 171], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[13, 15, 75, 84, 130, 135, 146, 151], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[19], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[24], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[33, 35, 132, 159], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[34], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[36, 52, 56, 62, 73, 74, 89, 137, 142, 143, 150, 163, 168], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[45, 46, 47, 48, 49, 50, 51, 55, 148, 169, 453], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[57, 59, 72, 80, 108, 109, 110, 114, 125, 128, 129, 134, 155, 349, 350, 351, 352, 355, 376, 378, 388, 437, 445, 459, 489, 511], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[58, 126, 131, 158], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[61, 140], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[63, 64, 65, 70, 71, 90, 95, 104, 105, 116, 117, 119, 120, 123, 173, 176, 177, 182, 185, 191, 215, 218, 228, 232, 233, 235, 236, 240, 248, 249, 252, 253, 256, 258, 261, 264, 274, 276, 277, 278, 284, 285, 353, 356, 359, 361, 384, 408, 416], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[66, 68, 174, 179, 188, 216, 241, 255, 263, 275, 280, 371, 391, 394], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[67, 187], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[69, 121, 124, 186, 192, 231, 237, 238, 239, 251, 257, 260, 265, 271], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[91, 93, 181, 184, 195, 197, 202, 203, 207, 208, 220, 226, 246, 262, 268, 272, 287, 289, 291, 293], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[92, 94, 103, 221, 222, 229, 234, 247, 250, 266, 279, 295, 296, 354, 360, 362, 409, 417], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[96, 97, 98, 99, 100, 101, 102, 106, 118, 178, 183, 194, 198, 199, 204, 205, 206, 219, 223, 245, 259, 267, 273, 286, 288, 290, 292], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[107], [
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[122, 209, 300, 303, 304, 305, 306, 309, 314, 315, 316, 317, 322, 323, 324, 325, 326, 327, 328, 329, 330, 331, 332, 333, 339, 340, 341, 342, 343, 344, 364, 365, 386, 387, 399, 490, 491, 495, 496, 504, 512, 513, 514, 521, 522], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[127], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[141], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[175, 244, 254], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[180], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[189, 190, 217, 369, 373], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[193], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[196, 201, 225], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[200, 224, 269, 281, 294, 297], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[210, 302, 308], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[211, 301, 307], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[212, 213], [
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[214], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[227, 230, 282, 357, 358, 366, 367, 392, 400, 413, 494, 503, 517], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[242, 243, 370, 393, 395], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[270, 283], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[298, 299, 318, 345, 348, 410], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[310, 311, 313, 319, 337, 338, 363, 404, 414, 420, 424], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[312, 320], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[321], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[334, 426, 497, 500, 505, 507, 518, 520, 523, 529], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[335], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[336], [
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 1.0/8.0, 3.0/8.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[346, 347], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[368], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 3.0/8.0, closed), span!(closed 7.0/8.0, 1.0, closed)],
    ]),
    (&[372], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 1.0/8.0, 5.0/8.0, closed)],
    ]),
    (&[374, 396, 401, 407, 412], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
    ]),
    (&[375], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed), span!(closed 3.0/4.0, 1.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[377, 390], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[379], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 1.0/4.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[380, 381, 382, 389], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[383], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[385], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[397, 418], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
    ]),
    (&[398, 419], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 1.0/4.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[402, 406], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[403], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[405, 411, 415, 421], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[422], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[423], [
        &[span!(open 0.0, 3.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[425], [
        &[span!(closed 0.0, 3.0/4.0, open)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
    ]),
    (&[427], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 3.0/8.0, closed), span!(closed 7.0/8.0, 1.0, closed)],
    ]),
    (&[428, 519], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[429], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 1.0/8.0, 5.0/8.0, closed)],
    ]),
    (&[430, 446], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[431, 432], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/3.0, open)],
    ]),
    (&[433], [
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[435, 439, 447, 449, 462, 467], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[436], [
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 5.0/6.0, 1.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[438, 468, 481], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[440, 442], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/6.0, closed)],
    ]),
    (&[441], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
    ]),
    (&[443], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
    ]),
    (&[444], [
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[448], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[450], [
        &[span!(closed 0.0, 5.0/12.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, open)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[452], [
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, open)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[454, 469, 471, 483], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[455, 470, 476, 484], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[456, 477, 480], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 2.0/3.0, 1.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[457, 478, 479], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[458], [
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/6.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[460], [
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 5.0/6.0, 1.0, closed)],
        &[span!(closed 1.0/12.0, 7.0/12.0, closed)],
    ]),
    (&[461], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed), span!(closed 3.0/4.0, 1.0, closed)],
        &[span!(closed 0.0, 3.0/4.0, open)],
    ]),
    (&[463, 464], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/6.0, open)],
    ]),
    (&[465, 466], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, open)],
    ]),
    (&[472], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/12.0, closed), span!(closed 11.0/12.0, 1.0, closed)],
    ]),
    (&[473], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 1.0/12.0, 1.0/4.0, closed)],
    ]),
    (&[474, 475], [
        &[span!(closed 0.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/6.0, closed)],
    ]),
    (&[482], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
    ]),
    (&[485], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 2.0/3.0, 1.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, closed)],
    ]),
    (&[486, 487], [
        &[span!(closed 0.0, 2.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/3.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
    ]),
    (&[488], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 2.0/3.0, 1.0, closed)],
        &[span!(closed 1.0/4.0, 3.0/4.0, closed)],
    ]),
    (&[492], [
        &[span!(closed 0.0, 1.0/4.0, open), span!(closed 3.0/4.0, 1.0, open)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(closed 0.0, 3.0/4.0, closed)],
    ]),
    (&[493], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
        &[span!(open 0.0, 3.0/4.0, open)],
    ]),
    (&[498, 499, 506, 525, 526], [
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[501], [
        &[span!(closed 0.0, 1.0/2.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, open), span!(closed 3.0/4.0, 1.0, open)],
    ]),
    (&[502, 515], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[508, 509], [
        &[span!(closed 1.0/8.0, 3.0/8.0, closed)],
        &[span!(closed 1.0/8.0, 3.0/8.0, closed)],
        &[span!(closed 0.0, 1.0, open)],
    ]),
    (&[510, 516], [
        &[span!(closed 0.0, 1.0/8.0, closed), span!(closed 7.0/8.0, 1.0, closed)],
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(open 0.0, 7.0/8.0, open)],
    ]),
    (&[524], [
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
        &[span!(closed 0.0, 1.0/4.0, closed)],
    ]),
    (&[527, 528], [
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 0.0, 1.0/2.0, open)],
    ]),
    (&[530], [
        &[span!(closed 0.0, 1.0/8.0, closed)],
        &[span!(closed 7.0/8.0, 1.0, closed)],
        &[span!(open 1.0/8.0, 7.0/8.0, open)],
    ]),
];
